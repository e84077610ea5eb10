use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::sink::create_looping_sink;
use super::types::{AudioCmd, PlayerEvent, PositionHandle};

/// Spawn the thread owning the output stream.
///
/// `ready` receives exactly one message: `Ok(())` once the default output
/// device is open, or the reason it could not be opened (the thread then exits).
pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<PlayerEvent>,
    ready: Sender<Result<(), String>>,
    position: PositionHandle,
    volume: f32,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("neuralwaves-audio".into())
        .spawn(move || {
            let mut stream = match OutputStreamBuilder::open_default_stream() {
                Ok(s) => s,
                Err(e) => {
                    let _ = ready.send(Err(e.to_string()));
                    return;
                }
            };
            // rodio logs to stderr when OutputStream is dropped, which would
            // scribble over the TUI.
            stream.log_on_drop(false);
            let _ = ready.send(Ok(()));

            let mut sink: Option<Sink> = None;

            loop {
                match rx.recv_timeout(Duration::from_millis(200)) {
                    Ok(AudioCmd::Load { path, resource }) => {
                        if let Some(old) = sink.take() {
                            old.stop();
                        }
                        match create_looping_sink(&stream, &path, volume) {
                            Ok(s) => {
                                debug!(path = %path.display(), "sink ready");
                                sink = Some(s);
                            }
                            Err(e) => {
                                warn!(error = %e, "audio load failed");
                                let _ = events.send(PlayerEvent::LoadFailed { resource, error: e });
                            }
                        }
                        set_position(&position, Duration::ZERO);
                    }
                    Ok(AudioCmd::Play) => {
                        if let Some(s) = sink.as_ref() {
                            s.play();
                        }
                    }
                    Ok(AudioCmd::Pause) => {
                        if let Some(s) = sink.as_ref() {
                            s.pause();
                        }
                    }
                    Ok(AudioCmd::Stop) => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        set_position(&position, Duration::ZERO);
                    }
                    Ok(AudioCmd::Quit { fade_out_ms }) => {
                        if let Some(s) = sink.take() {
                            if !s.is_paused() {
                                fade_out_sink(&s, fade_out_ms);
                            }
                            s.stop();
                        }
                        break;
                    }
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }

                if let Some(s) = sink.as_ref() {
                    set_position(&position, s.get_pos());
                }
            }
            debug!("audio thread exiting");
        })
}

fn set_position(position: &PositionHandle, value: Duration) {
    if let Ok(mut p) = position.lock() {
        *p = value;
    }
}

fn fade_out_sink(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
