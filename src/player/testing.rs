//! A scripted player for exercising the controller without audio.

use std::collections::VecDeque;
use std::time::Duration;

use super::types::{LoadError, MediaPlayer, PlayerEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Load(String),
    Play,
    Pause,
    Stop,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingPlayer {
    pub calls: Vec<Call>,
    /// When set, `load` fails with this error.
    pub fail_load: Option<LoadError>,
    pub pending: VecDeque<PlayerEvent>,
}

impl RecordingPlayer {
    pub fn failing(err: LoadError) -> Self {
        Self {
            fail_load: Some(err),
            ..Self::default()
        }
    }

    pub fn last_call(&self) -> Option<&Call> {
        self.calls.last()
    }
}

impl MediaPlayer for RecordingPlayer {
    fn load(&mut self, resource: &str) -> Result<(), LoadError> {
        self.calls.push(Call::Load(resource.to_string()));
        match self.fail_load.clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn play(&mut self) {
        self.calls.push(Call::Play);
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
    }

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn poll_event(&mut self) -> Option<PlayerEvent> {
        self.pending.pop_front()
    }
}
