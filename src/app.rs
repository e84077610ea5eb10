//! Application module: exposes the view model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds screen navigation state.
//! Playback state itself belongs to the `PlaybackController`.

mod model;

pub use model::*;
