use std::time::{Duration, Instant};

use tracing::debug;

use super::types::{LoadError, MediaPlayer, PlayerEvent};

/// A player without audio output. It accepts every resource and only keeps
/// track of how long it has been playing.
#[derive(Debug, Default)]
pub struct SilentPlayer {
    loaded: Option<String>,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaPlayer for SilentPlayer {
    fn load(&mut self, resource: &str) -> Result<(), LoadError> {
        debug!(resource, "silent load");
        self.loaded = Some(resource.to_string());
        self.started_at = None;
        self.accumulated = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        if self.loaded.is_some() && self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn pause(&mut self) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn position(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn poll_event(&mut self) -> Option<PlayerEvent> {
        None
    }
}
