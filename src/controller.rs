//! Playback controller: the single state holder the screens drive.
//!
//! `PlaybackController` owns the current track selection, play/pause/stop
//! state, the playback mode (unbounded or sleep timer), elapsed/remaining
//! counters and the saved-track set. Audio output is delegated to a
//! [`MediaPlayer`](crate::player::MediaPlayer).

mod error;
mod format;
mod model;
mod types;

pub use error::PlaybackError;
pub use format::format_clock;
pub use model::*;
pub use types::*;
