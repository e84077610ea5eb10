//! Value types shared by the controller and its observers.

use std::time::Duration;

use crate::catalog::TrackId;

/// How long playback runs once started.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Play until stopped.
    #[default]
    Unbounded,
    /// Stop automatically after the given time.
    Fixed(Duration),
}

impl PlaybackMode {
    pub fn fixed_minutes(minutes: u64) -> Self {
        Self::Fixed(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Remaining time right after the mode is (re)applied.
    pub fn full_remaining(&self) -> Duration {
        match self {
            Self::Unbounded => Duration::ZERO,
            Self::Fixed(d) => *d,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unbounded => "Infinite".to_string(),
            Self::Fixed(d) => format!("Timer {} min", d.as_secs() / 60),
        }
    }
}

/// Where the playback state machine currently is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No track selected yet.
    #[default]
    Idle,
    /// A track is selected; counters are at their reset values.
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
        }
    }
}

/// Point-in-time copy of everything an observer may render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub track: Option<TrackId>,
    pub state: PlaybackState,
    pub mode: PlaybackMode,
    pub elapsed: Duration,
    pub remaining: Duration,
    /// Saved track ids, sorted.
    pub saved: Vec<TrackId>,
}

/// Change notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    TrackSelected(TrackId),
    StateChanged(PlaybackState),
    ModeChanged(PlaybackMode),
    SavedChanged { id: TrackId, saved: bool },
    Progress { elapsed: Duration, remaining: Duration },
    /// The sleep timer ran out and playback stopped on its own.
    TimerExpired,
}

/// Handle returned by `subscribe`, used to unsubscribe again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);
