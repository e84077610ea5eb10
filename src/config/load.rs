use std::{env, path::PathBuf};

use super::schema::Settings;

/// Longest sleep timer accepted from configuration (one day).
pub const MAX_TIMER_MINUTES: u64 = 24 * 60;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then overlays environment
/// variables (prefix `NEURALWAVES__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("NEURALWAVES")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.fixed_minutes == 0 {
            return Err("playback.fixed_minutes must be >= 1".to_string());
        }
        if self.playback.fixed_minutes > MAX_TIMER_MINUTES {
            return Err(format!(
                "playback.fixed_minutes must be <= {MAX_TIMER_MINUTES}"
            ));
        }
        if self.playback.timer_presets_minutes.is_empty() {
            return Err("playback.timer_presets_minutes must not be empty".to_string());
        }
        if self.playback.timer_presets_minutes.contains(&0) {
            return Err("playback.timer_presets_minutes entries must be >= 1".to_string());
        }
        if self
            .playback
            .timer_presets_minutes
            .iter()
            .any(|&m| m > MAX_TIMER_MINUTES)
        {
            return Err(format!(
                "playback.timer_presets_minutes entries must be <= {MAX_TIMER_MINUTES}"
            ));
        }
        if self.playback.tick_ms == 0 {
            return Err("playback.tick_ms must be >= 1".to_string());
        }
        if !(0.0..=2.0).contains(&self.audio.volume) {
            return Err("audio.volume must be between 0.0 and 2.0".to_string());
        }
        Ok(())
    }

    /// Sounds directory from config, or the XDG data default.
    pub fn sounds_dir(&self) -> Option<PathBuf> {
        self.audio.sounds_dir.clone().or_else(default_sounds_dir)
    }

    /// Log file from config, or the XDG state default.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(default_log_path)
    }
}

/// Resolve the config path from `NEURALWAVES_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("NEURALWAVES_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/neuralwaves/config.toml`
/// or `~/.config/neuralwaves/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).map(|d| d.join("neuralwaves").join("config.toml"))
}

/// `$XDG_DATA_HOME/neuralwaves/sounds` or `~/.local/share/neuralwaves/sounds`.
pub fn default_sounds_dir() -> Option<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"]).map(|d| d.join("neuralwaves").join("sounds"))
}

/// `$XDG_STATE_HOME/neuralwaves/neuralwaves.log` or `~/.local/state/neuralwaves/neuralwaves.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"])
        .map(|d| d.join("neuralwaves").join("neuralwaves.log"))
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        return Some(PathBuf::from(xdg));
    }
    env::var_os("HOME").map(|home| {
        home_fallback
            .iter()
            .fold(PathBuf::from(home), |p, part| p.join(part))
    })
}
