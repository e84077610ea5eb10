//! The `PlaybackController` state machine.
//!
//! ```text
//! Idle --select--> Stopped --play--> Playing --pause--> Paused
//!                     ^                |  ^                |
//!                     +------stop------+  +------play------+
//!                     +---------- timer ran out -----------+ (from Playing)
//! ```
//!
//! Every mutation is announced to subscribers as a [`ControllerEvent`].

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Track, TrackId};
use crate::player::{MediaPlayer, PlayerEvent};

use super::error::PlaybackError;
use super::format::format_clock;
use super::types::{
    ControllerEvent, PlaybackMode, PlaybackSnapshot, PlaybackState, SubscriptionId,
};

type Subscriber = Box<dyn FnMut(&ControllerEvent)>;

/// Owns playback state for one session and drives a media player.
pub struct PlaybackController<P> {
    catalog: &'static Catalog,
    player: P,
    current: Option<&'static Track>,
    state: PlaybackState,
    mode: PlaybackMode,
    elapsed: Duration,
    remaining: Duration,
    saved: HashSet<TrackId>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<P: MediaPlayer> PlaybackController<P> {
    pub fn new(catalog: &'static Catalog, player: P) -> Self {
        Self {
            catalog,
            player,
            current: None,
            state: PlaybackState::Idle,
            mode: PlaybackMode::Unbounded,
            elapsed: Duration::ZERO,
            remaining: Duration::ZERO,
            saved: HashSet::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn current_track(&self) -> Option<&'static Track> {
        self.current
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn playback_mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn formatted_elapsed(&self) -> String {
        format_clock(self.elapsed())
    }

    pub fn formatted_remaining(&self) -> String {
        format_clock(self.remaining())
    }

    /// Where the media player reports it is inside the loaded resource.
    pub fn player_position(&self) -> Duration {
        self.player.position()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Make `track` current without starting it.
    ///
    /// Anything already loaded is stopped, so the controller ends up `Stopped`
    /// with counters reset for the current mode.
    pub fn select_track(&mut self, track: &'static Track) {
        if matches!(self.state, PlaybackState::Playing | PlaybackState::Paused) {
            self.player.stop();
        }
        info!(track = %track.id, "track selected");
        self.current = Some(track);
        self.reset_counters();
        self.emit(ControllerEvent::TrackSelected(track.id));
        self.set_state(PlaybackState::Stopped);
        self.emit_progress();
    }

    /// Select a catalog track by its textual id.
    pub fn select_track_by_id(&mut self, id: &str) -> Result<(), PlaybackError> {
        let track = self
            .catalog
            .find(id)
            .ok_or_else(|| PlaybackError::UnknownTrack(id.to_string()))?;
        self.select_track(track);
        Ok(())
    }

    /// Start or resume the current track.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        let Some(track) = self.current else {
            warn!("play requested with no track selected");
            return Err(PlaybackError::NoTrackSelected);
        };

        match self.state {
            PlaybackState::Playing => return Ok(()),
            PlaybackState::Paused => self.player.play(),
            PlaybackState::Stopped | PlaybackState::Idle => {
                if let Err(e) = self.player.load(track.resource) {
                    warn!(track = %track.id, error = %e, "failed to load track");
                    return Err(e.into());
                }
                // A timer that already ran out is re-armed for the next run.
                if self.remaining.is_zero() {
                    self.remaining = self.mode.full_remaining();
                }
                self.player.play();
            }
        }

        self.set_state(PlaybackState::Playing);
        Ok(())
    }

    /// Pause playback, keeping the counters.
    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.player.pause();
        self.set_state(PlaybackState::Paused);
    }

    /// Stop playback, release the resource and reset the counters.
    pub fn stop(&mut self) {
        self.player.stop();
        self.reset_counters();
        if self.current.is_some() {
            self.set_state(PlaybackState::Stopped);
        }
        self.emit_progress();
    }

    /// Replace the playback mode. A zero-length timer is rejected and the
    /// previous mode stays in effect.
    pub fn set_playback_mode(&mut self, mode: PlaybackMode) -> Result<(), PlaybackError> {
        if let PlaybackMode::Fixed(d) = mode {
            if d.is_zero() {
                warn!("rejected zero-length timer");
                return Err(PlaybackError::InvalidDuration);
            }
        }
        info!(mode = %mode.label(), "playback mode set");
        self.mode = mode;
        self.remaining = mode.full_remaining();
        self.emit(ControllerEvent::ModeChanged(mode));
        self.emit_progress();
        Ok(())
    }

    /// Flip saved membership of `id`; returns whether it is saved afterwards.
    pub fn toggle_saved(&mut self, id: TrackId) -> bool {
        let saved = if self.saved.remove(&id) {
            false
        } else {
            self.saved.insert(id);
            true
        };
        debug!(track = %id, saved, "saved toggled");
        self.emit(ControllerEvent::SavedChanged { id, saved });
        saved
    }

    /// Drop `id` from the saved set; returns whether it was there.
    pub fn remove_saved(&mut self, id: TrackId) -> bool {
        let removed = self.saved.remove(&id);
        if removed {
            self.emit(ControllerEvent::SavedChanged { id, saved: false });
        }
        removed
    }

    pub fn is_saved(&self, id: TrackId) -> bool {
        self.saved.contains(&id)
    }

    /// Saved tracks in catalog order.
    pub fn saved_tracks(&self) -> Vec<&'static Track> {
        self.catalog
            .tracks()
            .iter()
            .filter(|t| self.saved.contains(&t.id))
            .collect()
    }

    /// Advance the counters by `delta`. Returns `true` when the sleep timer
    /// ran out and playback was stopped by this tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }

        self.elapsed += delta;
        if self.mode.is_fixed() {
            self.remaining = self.remaining.saturating_sub(delta);
            if self.remaining.is_zero() {
                info!("sleep timer finished, stopping playback");
                self.player.stop();
                self.elapsed = Duration::ZERO;
                self.set_state(PlaybackState::Stopped);
                self.emit(ControllerEvent::TimerExpired);
                self.emit_progress();
                return true;
            }
        }

        self.emit_progress();
        false
    }

    /// Apply an asynchronous report from the media player.
    pub fn handle_player_event(&mut self, event: PlayerEvent) -> Result<(), PlaybackError> {
        match event {
            PlayerEvent::LoadFailed { resource, error } => {
                // A failure for a track that is no longer current is stale.
                if self.current.map(|t| t.resource) != Some(resource.as_str()) {
                    debug!(resource = %resource, error = %error, "ignoring load failure for replaced track");
                    return Ok(());
                }
                warn!(error = %error, "media player could not load resource");
                self.player.stop();
                self.reset_counters();
                if self.current.is_some() {
                    self.set_state(PlaybackState::Stopped);
                }
                self.emit_progress();
                Err(error.into())
            }
        }
    }

    /// Drain pending player reports, returning the errors they produced.
    pub fn process_player_events(&mut self) -> Vec<PlaybackError> {
        let mut errors = Vec::new();
        while let Some(event) = self.player.poll_event() {
            if let Err(e) = self.handle_player_event(event) {
                errors.push(e);
            }
        }
        errors
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let mut saved: Vec<TrackId> = self.saved.iter().copied().collect();
        saved.sort();
        PlaybackSnapshot {
            track: self.current.map(|t| t.id),
            state: self.state,
            mode: self.mode,
            elapsed: self.elapsed,
            remaining: self.remaining,
            saved,
        }
    }

    /// Register `f` to be called after every state change.
    pub fn subscribe(&mut self, f: impl FnMut(&ControllerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn reset_counters(&mut self) {
        self.elapsed = Duration::ZERO;
        self.remaining = self.mode.full_remaining();
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state == state {
            return;
        }
        debug!(from = self.state.label(), to = state.label(), "playback state");
        self.state = state;
        self.emit(ControllerEvent::StateChanged(state));
    }

    fn emit_progress(&mut self) {
        self.emit(ControllerEvent::Progress {
            elapsed: self.elapsed,
            remaining: self.remaining,
        });
    }

    fn emit(&mut self, event: ControllerEvent) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}
