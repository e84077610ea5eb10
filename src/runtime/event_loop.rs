use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{App, Screen};
use crate::catalog::Track;
use crate::config;
use crate::controller::{PlaybackController, PlaybackError, PlaybackMode};
use crate::mpris::ControlCmd;
use crate::player::MediaPlayer;
use crate::ui;

/// Hands out controller ticks at a fixed cadence, measured on the wall clock.
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Time to feed into the controller, once at least one interval passed.
    /// While the clock is not `running` the anchor follows `now`, so paused
    /// time is never handed out.
    pub fn due(&mut self, now: Instant, running: bool) -> Option<Duration> {
        if !running {
            self.last = now;
            return None;
        }
        let delta = now.saturating_duration_since(self.last);
        if delta < self.interval {
            return None;
        }
        self.last = now;
        Some(delta)
    }
}

/// Main terminal event loop: handles input, drawing, the playback clock,
/// player reports and MPRIS commands. Returns `Ok(())` when shutdown is
/// requested.
pub fn run<P: MediaPlayer>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<P>,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut ticker = Ticker::new(Duration::from_millis(settings.playback.tick_ms), Instant::now());

    loop {
        for e in controller.process_player_events() {
            app.set_status(e.to_string());
        }

        if let Some(delta) = ticker.due(Instant::now(), controller.is_playing()) {
            if controller.tick(delta) {
                app.set_status("Sleep timer finished");
            }
        }

        terminal.draw(|f| ui::draw(f, app, controller, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, app, controller) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, controller) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn report<T>(app: &mut App, result: Result<T, PlaybackError>) {
    if let Err(e) = result {
        debug!(error = %e, "action failed");
        app.set_status(e.to_string());
    }
}

fn toggle_play<P: MediaPlayer>(app: &mut App, controller: &mut PlaybackController<P>) {
    if controller.is_playing() {
        controller.pause();
    } else {
        let result = controller.play();
        report(app, result);
    }
}

/// Apply a command coming from MPRIS. Returns `true` on quit.
fn handle_control_cmd<P: MediaPlayer>(
    cmd: ControlCmd,
    app: &mut App,
    controller: &mut PlaybackController<P>,
) -> bool {
    debug!(?cmd, "control command");
    match cmd {
        ControlCmd::Quit => {
            info!("quit requested over MPRIS");
            return true;
        }
        ControlCmd::Play => {
            let result = controller.play();
            report(app, result);
        }
        ControlCmd::Pause => controller.pause(),
        ControlCmd::PlayPause => toggle_play(app, controller),
        ControlCmd::Stop => controller.stop(),
    }
    false
}

/// Select `track` and start it, unless it is already the one playing.
fn start_track<P: MediaPlayer>(
    app: &mut App,
    controller: &mut PlaybackController<P>,
    track: &'static Track,
) {
    let already_playing =
        controller.is_playing() && controller.current_track().map(|t| t.id) == Some(track.id);
    if !already_playing {
        controller.select_track(track);
        let result = controller.play();
        report(app, result);
    }
    app.set_screen(Screen::Player);
}

/// The track `f` acts on for the visible screen.
fn focused_track<P: MediaPlayer>(
    app: &App,
    controller: &PlaybackController<P>,
) -> Option<&'static Track> {
    match app.screen {
        Screen::Categories => app.highlighted_track(controller.catalog()),
        Screen::Player => controller.current_track(),
        Screen::Saved => app.highlighted_saved(&controller.saved_tracks()),
    }
}

fn visible_len<P: MediaPlayer>(app: &App, controller: &PlaybackController<P>) -> usize {
    match app.screen {
        Screen::Categories => app.category_tracks(controller.catalog()).len(),
        Screen::Saved => controller.saved_tracks().len(),
        Screen::Player => 0,
    }
}

/// Re-apply the picked timer length when the timer is the active mode.
fn apply_preset<P: MediaPlayer>(app: &mut App, controller: &mut PlaybackController<P>) {
    if !controller.playback_mode().is_fixed() {
        return;
    }
    if let Some(minutes) = app.preset_minutes() {
        let result = controller.set_playback_mode(PlaybackMode::fixed_minutes(minutes));
        report(app, result);
    }
}

/// Handle a key press. Returns `true` when the user asked to quit.
pub fn handle_key_event<P: MediaPlayer>(
    key: KeyEvent,
    app: &mut App,
    controller: &mut PlaybackController<P>,
) -> bool {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.next_screen(),
        KeyCode::Char('1') => app.set_screen(Screen::Categories),
        KeyCode::Char('2') => app.set_screen(Screen::Player),
        KeyCode::Char('3') => app.set_screen(Screen::Saved),
        KeyCode::Char('j') | KeyCode::Down => {
            let len = visible_len(app, controller);
            app.cursor_down(len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let len = visible_len(app, controller);
            app.cursor_up(len);
        }
        KeyCode::Char('h') | KeyCode::Left if app.screen == Screen::Categories => {
            app.prev_category();
        }
        KeyCode::Char('l') | KeyCode::Right if app.screen == Screen::Categories => {
            app.next_category();
        }
        KeyCode::Enter => match app.screen {
            Screen::Player => toggle_play(app, controller),
            Screen::Categories | Screen::Saved => {
                if let Some(t) = focused_track(app, controller) {
                    start_track(app, controller, t);
                }
            }
        },
        KeyCode::Char(' ') | KeyCode::Char('p') => toggle_play(app, controller),
        KeyCode::Char('x') => controller.stop(),
        KeyCode::Char('m') => {
            let mode = match controller.playback_mode() {
                PlaybackMode::Fixed(_) => PlaybackMode::Unbounded,
                PlaybackMode::Unbounded => {
                    PlaybackMode::fixed_minutes(app.preset_minutes().unwrap_or_default())
                }
            };
            let result = controller.set_playback_mode(mode);
            report(app, result);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.next_preset();
            apply_preset(app, controller);
        }
        KeyCode::Char('-') => {
            app.prev_preset();
            apply_preset(app, controller);
        }
        KeyCode::Char('f') => match focused_track(app, controller) {
            Some(t) => {
                let saved = controller.toggle_saved(t.id);
                let verb = if saved { "Saved" } else { "Removed" };
                app.set_status(format!("{verb} {}", t.title));
                app.clamp_saved_cursor(controller.saved_tracks().len());
            }
            None => app.set_status(PlaybackError::NoTrackSelected.to_string()),
        },
        KeyCode::Char('d') if app.screen == Screen::Saved => {
            if let Some(t) = focused_track(app, controller) {
                controller.remove_saved(t.id);
                app.set_status(format!("Removed {}", t.title));
                app.clamp_saved_cursor(controller.saved_tracks().len());
            }
        }
        _ => {}
    }

    false
}
