use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::catalog::Catalog;
use crate::controller::PlaybackController;
use crate::library::SoundIndex;
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_problem) = settings::load_settings();
    let log_file = logging::init(&settings);
    if let Some(problem) = &config_problem {
        warn!("{problem}");
        if log_file.is_none() {
            eprintln!("neuralwaves: {problem}");
        }
    }

    // A directory on the command line wins over the configured one.
    let sounds_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.sounds_dir());
    let library = match &sounds_dir {
        Some(dir) => SoundIndex::scan(dir),
        None => SoundIndex::empty(),
    };
    info!(
        dir = ?library.root(),
        sounds = library.len(),
        "sound library indexed"
    );
    if library.is_empty() {
        warn!("no sound files found, tracks will fail to load");
    }

    let output = startup::build_output(library, &settings.audio);
    info!(backend = output.backend_name(), "media player ready");

    let mut controller = PlaybackController::new(Catalog::reference(), output);
    let mut app = App::new(
        startup::start_screen(settings.ui.start_screen),
        settings.playback.timer_presets_minutes.clone(),
    );
    startup::apply_playback_defaults(&mut app, &mut controller, &settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);
    mpris_sync::attach(&mut controller, mpris);

    // Optional second argument preselects a catalog track.
    if let Some(id) = env::args().nth(2) {
        if let Err(e) = controller.select_track_by_id(&id) {
            warn!(error = %e, "ignoring track argument");
            app.set_status(e.to_string());
        }
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &control_rx,
    );

    controller
        .player()
        .quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
    info!("shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
