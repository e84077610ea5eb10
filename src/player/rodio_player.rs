use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::AudioSettings;
use crate::library::SoundIndex;

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, LoadError, MediaPlayer, PlayerError, PlayerEvent, PositionHandle};

/// Media player backed by `rodio` and the default output device.
pub struct RodioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<PlayerEvent>,
    position: PositionHandle,
    library: SoundIndex,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl RodioPlayer {
    /// Open the default output device on a new audio thread.
    pub fn spawn(library: SoundIndex, settings: &AudioSettings) -> Result<Self, PlayerError> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();
        let position: PositionHandle = Arc::new(Mutex::new(Duration::ZERO));

        let join = spawn_audio_thread(rx, event_tx, ready_tx, position.clone(), settings.volume)?;

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(reason)) => {
                let _ = join.join();
                return Err(PlayerError::OutputUnavailable(reason));
            }
            Err(_) => {
                let _ = join.join();
                return Err(PlayerError::OutputUnavailable(
                    "audio thread exited during startup".to_string(),
                ));
            }
        }

        info!(sounds = library.len(), "rodio output ready");
        Ok(Self {
            tx,
            events: event_rx,
            position,
            library,
            join: Mutex::new(Some(join)),
        })
    }

    /// Ask the audio thread to fade out and exit, then wait for it.
    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.tx.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

impl MediaPlayer for RodioPlayer {
    fn load(&mut self, resource: &str) -> Result<(), LoadError> {
        let path = self
            .library
            .resolve(resource)
            .ok_or_else(|| LoadError::NotFound(resource.to_string()))?;
        debug!(resource, path = %path.display(), "loading");
        self.tx
            .send(AudioCmd::Load {
                path,
                resource: resource.to_string(),
            })
            .map_err(|_| LoadError::Disconnected)
    }

    fn play(&mut self) {
        let _ = self.tx.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        let _ = self.tx.send(AudioCmd::Pause);
    }

    fn stop(&mut self) {
        let _ = self.tx.send(AudioCmd::Stop);
    }

    fn position(&self) -> Duration {
        self.position.lock().map(|p| *p).unwrap_or(Duration::ZERO)
    }

    fn poll_event(&mut self) -> Option<PlayerEvent> {
        self.events.try_recv().ok()
    }
}

impl Drop for RodioPlayer {
    fn drop(&mut self) {
        self.quit_softly(Duration::ZERO);
    }
}
