use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/neuralwaves/config.toml` or
/// `~/.config/neuralwaves/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `NEURALWAVES__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Which player to use.
    pub backend: BackendSetting,
    /// Directory holding the audio files named by the catalog.
    /// Defaults to `$XDG_DATA_HOME/neuralwaves/sounds`.
    pub sounds_dir: Option<PathBuf>,
    /// Output volume, 1.0 is unchanged.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            backend: BackendSetting::Auto,
            sounds_dir: None,
            volume: 1.0,
            quit_fade_out_ms: 500,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendSetting {
    /// Use the audio device when there is one, otherwise run silently.
    Auto,
    Rodio,
    #[serde(alias = "none", alias = "null")]
    Silent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Mode applied at startup.
    pub default_mode: ModeSetting,
    /// Timer length used when switching to fixed mode (minutes).
    pub fixed_minutes: u64,
    /// Timer lengths offered on the player screen (minutes).
    pub timer_presets_minutes: Vec<u64>,
    /// How often the elapsed/remaining counters advance (milliseconds).
    pub tick_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            default_mode: ModeSetting::Unbounded,
            fixed_minutes: 30,
            timer_presets_minutes: vec![15, 30, 45, 60, 90, 120],
            tick_ms: 1000,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    #[serde(alias = "infinite")]
    Unbounded,
    #[serde(alias = "timing", alias = "timer")]
    Fixed,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Screen shown at startup.
    pub start_screen: ScreenSetting,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Neural Waves ~ ".to_string(),
            start_screen: ScreenSetting::Categories,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenSetting {
    #[serde(alias = "browse")]
    Categories,
    Player,
    #[serde(alias = "favorites")]
    Saved,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `neuralwaves=debug`.
    /// `NEURALWAVES_LOG` takes precedence when set.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/neuralwaves/neuralwaves.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
