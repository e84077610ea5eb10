//! Utilities for creating `rodio` sinks from local audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused, endlessly repeating `Sink`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::LoadError;

/// Create a paused `Sink` that loops the file at `path` until stopped.
pub(super) fn create_looping_sink(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<Sink, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Open {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let source = Decoder::new(BufReader::new(file))
        .map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
        // Ambient tracks run until the user or the sleep timer stops them.
        .repeat_infinite();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
