use crate::controller::{ControllerEvent, PlaybackController, SubscriptionId};
use crate::mpris::MprisHandle;
use crate::player::MediaPlayer;

/// Mirror controller changes onto the MPRIS service for the rest of the
/// session.
pub fn attach<P: MediaPlayer>(
    controller: &mut PlaybackController<P>,
    mpris: MprisHandle,
) -> SubscriptionId {
    let catalog = controller.catalog();
    mpris.set_track_metadata(controller.current_track());
    mpris.set_playback(controller.state());

    controller.subscribe(move |event| match event {
        ControllerEvent::TrackSelected(id) => mpris.set_track_metadata(catalog.get(*id)),
        ControllerEvent::StateChanged(state) => mpris.set_playback(*state),
        _ => {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::controller::PlaybackState;
    use crate::player::testing::RecordingPlayer;

    #[test]
    fn selection_and_state_reach_mpris() {
        let mpris = MprisHandle::detached();
        let mut controller = PlaybackController::new(Catalog::reference(), RecordingPlayer::default());
        attach(&mut controller, mpris.clone());
        assert_eq!(mpris.published(), (PlaybackState::Idle, None));

        controller.select_track_by_id("relax-ocean-breeze").unwrap();
        controller.play().unwrap();
        assert_eq!(
            mpris.published(),
            (PlaybackState::Playing, Some("Ocean Breeze".to_string()))
        );

        controller.pause();
        assert_eq!(mpris.published().0, PlaybackState::Paused);
    }

    #[test]
    fn detaching_stops_updates() {
        let mpris = MprisHandle::detached();
        let mut controller = PlaybackController::new(Catalog::reference(), RecordingPlayer::default());
        let id = attach(&mut controller, mpris.clone());
        assert!(controller.unsubscribe(id));

        controller.select_track_by_id("focus-alpha-waves").unwrap();
        assert_eq!(mpris.published(), (PlaybackState::Idle, None));
    }
}
