//! Player capability trait, commands, events and error types.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

/// Why a resource could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no audio file found for `{0}`")]
    NotFound(String),
    #[error("failed to open {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("audio thread is not running")]
    Disconnected,
}

/// Startup failures of a player backend.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio output available: {0}")]
    OutputUnavailable(String),
    #[error("failed to spawn audio thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Reports a player delivers after the call that caused them has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The resource accepted by `load` turned out to be unplayable.
    /// `resource` is the locator that was passed to `load`.
    LoadFailed { resource: String, error: LoadError },
}

/// The capability set the playback controller needs from an audio backend.
///
/// Calls are fire-and-forget; anything that goes wrong after a call returns
/// is reported through [`MediaPlayer::poll_event`].
pub trait MediaPlayer {
    /// Prepare `resource` for playback, replacing whatever was loaded.
    /// The player stays paused until `play` is called.
    fn load(&mut self, resource: &str) -> Result<(), LoadError>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Stop playback and release the loaded resource.
    fn stop(&mut self);
    /// Current position inside the loaded resource.
    fn position(&self) -> Duration;
    /// Next pending asynchronous report, if any.
    fn poll_event(&mut self) -> Option<PlayerEvent>;
}

impl<P: MediaPlayer + ?Sized> MediaPlayer for Box<P> {
    fn load(&mut self, resource: &str) -> Result<(), LoadError> {
        (**self).load(resource)
    }

    fn play(&mut self) {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn stop(&mut self) {
        (**self).stop()
    }

    fn position(&self) -> Duration {
        (**self).position()
    }

    fn poll_event(&mut self) -> Option<PlayerEvent> {
        (**self).poll_event()
    }
}

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Replace the current sink with one reading `path`, the file behind
    /// `resource`.
    Load { path: PathBuf, resource: String },
    Play,
    Pause,
    Stop,
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Position of the current sink, published by the audio thread.
pub(super) type PositionHandle = Arc<Mutex<Duration>>;
