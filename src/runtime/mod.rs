use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use crate::app::App;
use crate::audio::{AudioBackend, PlaybackDriver, RodioBackend, SilentBackend};
use crate::config::{self, BackendSetting};
use crate::error::Result;
use crate::playlist::PlaylistState;
use crate::search::DeezerSearch;

use event_loop::ControlCmd;

mod event_loop;
mod input;
mod settings;
mod startup;


/// A headless music player driven by JSON directives on stdin.
#[derive(Debug, Parser)]
#[command(name = "encore", version, about)]
pub struct Args {
    /// Config file (defaults to $ENCORE_CONFIG_PATH or the XDG location).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON file with the initial playlist: {"tracks": [..], "currentIndex": n, "isPlaying": b}.
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Never open an audio device.
    #[arg(long)]
    pub silent: bool,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Forward stdin lines to the event loop until EOF.
fn spawn_stdin_reader(tx: mpsc::Sender<ControlCmd>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(ControlCmd::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    warn!("stdin: {e}");
                    break;
                }
            }
        }
        let _ = tx.send(ControlCmd::Eof);
    });
}

fn run_with<B: AudioBackend>(
    backend: B,
    state: PlaylistState,
    settings: &config::Settings,
) -> Result<()> {
    let fallback = Duration::from_secs(settings.audio.fallback_duration_secs);
    let driver = PlaybackDriver::new(backend, fallback);
    let mut app = App::new(state, driver, settings.playback.end_of_track.into());
    let search = DeezerSearch::new(&settings.search)?;

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    spawn_stdin_reader(control_tx);

    let mut stdout = std::io::stdout().lock();
    let mut loop_state = event_loop::EventLoopState::default();
    event_loop::run(
        settings,
        &mut app,
        &search,
        &control_rx,
        &mut stdout,
        &mut loop_state,
    )
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = settings::load_settings(args.config);
    let state = startup::initial_state(args.seed.as_deref())?;

    let fallback = Duration::from_secs(settings.audio.fallback_duration_secs);
    if args.silent || settings.audio.backend == BackendSetting::Silent {
        info!("silent backend selected");
        return run_with(SilentBackend::new(fallback), state, &settings);
    }

    let timeout = Duration::from_secs(settings.audio.fetch_timeout_secs);
    match RodioBackend::open_default(timeout) {
        Ok(backend) => run_with(backend, state, &settings),
        Err(e) => {
            warn!("{e}; continuing without sound");
            run_with(SilentBackend::new(fallback), state, &settings)
        }
    }
}
