//! Media player backends.
//!
//! The playback controller talks to audio output through the [`MediaPlayer`]
//! trait. `RodioPlayer` drives a real output device from a dedicated audio
//! thread; `SilentPlayer` only keeps a clock and is used when no device is
//! available.

mod rodio_player;
mod silent;
mod sink;
mod thread;
mod types;

pub use rodio_player::RodioPlayer;
pub use silent::SilentPlayer;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod tests;
