use super::load::{
    MAX_TIMER_MINUTES, default_config_path, default_log_path, default_sounds_dir,
    resolve_config_path,
};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_explicit_env_var() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("NEURALWAVES_CONFIG_PATH", "/tmp/nw-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/nw-test-config.toml")
    );
}

#[test]
fn default_paths_prefer_xdg_dirs() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config");
    let _g2 = EnvGuard::set("XDG_DATA_HOME", "/tmp/xdg-data");
    let _g3 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    let _g4 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config/neuralwaves/config.toml")
    );
    assert_eq!(
        default_sounds_dir().unwrap(),
        PathBuf::from("/tmp/xdg-data/neuralwaves/sounds")
    );
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/xdg-state/neuralwaves/neuralwaves.log")
    );
}

#[test]
fn default_paths_fall_back_to_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::remove("XDG_DATA_HOME");
    let _g3 = EnvGuard::remove("XDG_STATE_HOME");
    let _g4 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.config/neuralwaves/config.toml")
    );
    assert_eq!(
        default_sounds_dir().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/share/neuralwaves/sounds")
    );
    assert_eq!(
        default_log_path().unwrap(),
        PathBuf::from("/tmp/home-dir/.local/state/neuralwaves/neuralwaves.log")
    );
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
backend = "none"
sounds_dir = "/srv/sounds"
volume = 0.5
quit_fade_out_ms = 0

[playback]
default_mode = "timing"
fixed_minutes = 45
timer_presets_minutes = [10, 20]
tick_ms = 250

[ui]
header_text = "hello"
start_screen = "favorites"

[logging]
level = "debug"
file = "/tmp/nw.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("NEURALWAVES_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("NEURALWAVES__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.backend, BackendSetting::Silent);
    assert_eq!(s.audio.sounds_dir, Some(PathBuf::from("/srv/sounds")));
    assert_eq!(s.sounds_dir(), Some(PathBuf::from("/srv/sounds")));
    assert_eq!(s.audio.volume, 0.5);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.playback.default_mode, ModeSetting::Fixed);
    assert_eq!(s.playback.fixed_minutes, 45);
    assert_eq!(s.playback.timer_presets_minutes, vec![10, 20]);
    assert_eq!(s.playback.tick_ms, 250);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.start_screen, ScreenSetting::Saved);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(s.log_file(), Some(PathBuf::from("/tmp/nw.log")));
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
fixed_minutes = 30
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("NEURALWAVES_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("NEURALWAVES__PLAYBACK__FIXED_MINUTES", "90");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.fixed_minutes, 90);
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "NEURALWAVES_CONFIG_PATH",
        dir.path().join("absent.toml").to_str().unwrap(),
    );

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.backend, BackendSetting::Auto);
    assert_eq!(s.playback.default_mode, ModeSetting::Unbounded);
    assert_eq!(s.playback.fixed_minutes, 30);
    assert_eq!(s.ui.start_screen, ScreenSetting::Categories);
}

#[test]
fn validate_rejects_zero_and_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.playback.fixed_minutes = 0;
    assert!(s.validate().unwrap_err().contains("fixed_minutes"));

    let mut s = Settings::default();
    s.playback.timer_presets_minutes = vec![15, 0];
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.timer_presets_minutes.clear();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.playback.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume = 3.0;
    assert!(s.validate().unwrap_err().contains("volume"));
}

#[test]
fn validate_rejects_timers_longer_than_a_day() {
    let mut s = Settings::default();
    s.playback.fixed_minutes = MAX_TIMER_MINUTES;
    assert!(s.validate().is_ok());

    s.playback.fixed_minutes = 400_000_000_000_000_000;
    assert!(s.validate().unwrap_err().contains("fixed_minutes"));

    let mut s = Settings::default();
    s.playback.timer_presets_minutes = vec![30, MAX_TIMER_MINUTES + 1];
    assert!(s.validate().unwrap_err().contains("timer_presets_minutes"));
}

#[test]
fn oversized_fixed_minutes_from_env_is_rejected() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g1 = EnvGuard::set(
        "NEURALWAVES_CONFIG_PATH",
        dir.path().join("missing.toml").to_str().unwrap(),
    );
    let _g2 = EnvGuard::set("NEURALWAVES__PLAYBACK__FIXED_MINUTES", "400000000000000000");

    let s = Settings::load().unwrap();
    assert!(s.validate().is_err());
}
