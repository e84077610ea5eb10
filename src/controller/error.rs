use thiserror::Error;

use crate::player::LoadError;

/// Conditions reported back to the caller of a controller operation.
///
/// None of them end the session; they exist so the screens can tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("no track selected")]
    NoTrackSelected,
    #[error("could not load track: {0}")]
    MediaLoadFailure(#[from] LoadError),
    #[error("timer duration must be greater than zero")]
    InvalidDuration,
    #[error("unknown track `{0}`")]
    UnknownTrack(String),
}
