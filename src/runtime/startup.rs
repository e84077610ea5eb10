use std::time::Duration;

use tracing::{info, warn};

use crate::app::{App, Screen};
use crate::config::{self, BackendSetting, ModeSetting, ScreenSetting};
use crate::controller::{PlaybackController, PlaybackMode};
use crate::library::SoundIndex;
use crate::player::{LoadError, MediaPlayer, PlayerEvent, RodioPlayer, SilentPlayer};

/// The media player picked at startup.
pub enum Output {
    Rodio(RodioPlayer),
    Silent(SilentPlayer),
}

impl Output {
    pub fn backend_name(&self) -> &'static str {
        match self {
            Output::Rodio(_) => "rodio",
            Output::Silent(_) => "silent",
        }
    }

    /// Fade out and release the audio device, if there is one.
    pub fn quit_softly(&self, fade_out: Duration) {
        if let Output::Rodio(p) = self {
            p.quit_softly(fade_out);
        }
    }
}

impl MediaPlayer for Output {
    fn load(&mut self, resource: &str) -> Result<(), LoadError> {
        match self {
            Output::Rodio(p) => p.load(resource),
            Output::Silent(p) => p.load(resource),
        }
    }

    fn play(&mut self) {
        match self {
            Output::Rodio(p) => p.play(),
            Output::Silent(p) => p.play(),
        }
    }

    fn pause(&mut self) {
        match self {
            Output::Rodio(p) => p.pause(),
            Output::Silent(p) => p.pause(),
        }
    }

    fn stop(&mut self) {
        match self {
            Output::Rodio(p) => p.stop(),
            Output::Silent(p) => p.stop(),
        }
    }

    fn position(&self) -> Duration {
        match self {
            Output::Rodio(p) => p.position(),
            Output::Silent(p) => p.position(),
        }
    }

    fn poll_event(&mut self) -> Option<PlayerEvent> {
        match self {
            Output::Rodio(p) => p.poll_event(),
            Output::Silent(p) => p.poll_event(),
        }
    }
}

/// Open the configured backend. `auto` prefers real output and degrades to
/// the silent player when no device is available.
pub fn build_output(library: SoundIndex, audio: &config::AudioSettings) -> Output {
    match audio.backend {
        BackendSetting::Silent => Output::Silent(SilentPlayer::new()),
        BackendSetting::Rodio | BackendSetting::Auto => match RodioPlayer::spawn(library, audio) {
            Ok(p) => Output::Rodio(p),
            Err(e) => {
                warn!(error = %e, "audio output unavailable, continuing without sound");
                Output::Silent(SilentPlayer::new())
            }
        },
    }
}

pub fn start_screen(setting: ScreenSetting) -> Screen {
    match setting {
        ScreenSetting::Categories => Screen::Categories,
        ScreenSetting::Player => Screen::Player,
        ScreenSetting::Saved => Screen::Saved,
    }
}

/// Apply the configured default mode to the controller and line up the timer
/// picker with it.
pub fn apply_playback_defaults<P: MediaPlayer>(
    app: &mut App,
    controller: &mut PlaybackController<P>,
    settings: &config::Settings,
) {
    let minutes = settings.playback.fixed_minutes;
    app.select_preset(minutes);

    let mode = match settings.playback.default_mode {
        ModeSetting::Unbounded => PlaybackMode::Unbounded,
        ModeSetting::Fixed => PlaybackMode::fixed_minutes(minutes),
    };
    if let Err(e) = controller.set_playback_mode(mode) {
        warn!(error = %e, "ignoring configured playback mode");
    }
    info!(mode = %controller.playback_mode().label(), "playback defaults applied");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::player::testing::RecordingPlayer;

    #[test]
    fn start_screen_maps_every_setting() {
        assert_eq!(start_screen(ScreenSetting::Categories), Screen::Categories);
        assert_eq!(start_screen(ScreenSetting::Player), Screen::Player);
        assert_eq!(start_screen(ScreenSetting::Saved), Screen::Saved);
    }

    #[test]
    fn silent_backend_never_opens_a_device() {
        let audio = config::AudioSettings {
            backend: BackendSetting::Silent,
            ..config::AudioSettings::default()
        };
        let out = build_output(SoundIndex::empty(), &audio);
        assert_eq!(out.backend_name(), "silent");
    }

    #[test]
    fn fixed_default_mode_arms_the_timer_and_picker() {
        let mut settings = config::Settings::default();
        settings.playback.default_mode = ModeSetting::Fixed;
        settings.playback.fixed_minutes = 45;

        let mut app = App::new(Screen::Categories, vec![15, 30, 45]);
        let mut controller = PlaybackController::new(Catalog::reference(), RecordingPlayer::default());
        apply_playback_defaults(&mut app, &mut controller, &settings);

        assert_eq!(app.preset_minutes(), Some(45));
        assert_eq!(
            controller.playback_mode(),
            PlaybackMode::Fixed(Duration::from_secs(45 * 60))
        );
        assert_eq!(controller.remaining(), Duration::from_secs(45 * 60));
    }

    #[test]
    fn unbounded_default_leaves_timer_unarmed() {
        let settings = config::Settings::default();
        let mut app = App::new(Screen::Categories, vec![15, 30, 45]);
        let mut controller = PlaybackController::new(Catalog::reference(), RecordingPlayer::default());
        apply_playback_defaults(&mut app, &mut controller, &settings);

        assert_eq!(controller.playback_mode(), PlaybackMode::Unbounded);
        assert_eq!(app.preset_minutes(), Some(30));
    }
}
