use std::io::Write;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use log::{debug, warn};

use crate::app::App;
use crate::audio::{AudioBackend, DriverState};
use crate::config;
use crate::error::Result;
use crate::library::{Song, Track, render_songs};
use crate::search::MusicSearch;

use super::input::{Command, HELP, Input, parse_line};

/// Messages from the stdin reader thread.
#[derive(Debug)]
pub enum ControlCmd {
    Line(String),
    Eof,
}

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Results of the last `search`, addressable by `add N`.
    pub results: Vec<Track>,
    pub last_query: Option<String>,
}

/// Render a position as `m:ss`.
fn clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn flush_outbound<B: AudioBackend, W: Write>(app: &mut App<B>, out: &mut W) -> Result<()> {
    let msgs = app.drain_outbound();
    if msgs.is_empty() {
        return Ok(());
    }
    for msg in msgs {
        writeln!(out, "{}", msg.to_line()?)?;
    }
    out.flush()?;
    Ok(())
}

/// One line describing what is playing.
pub fn status_line<B: AudioBackend>(app: &App<B>) -> String {
    let state = app.state();
    let Some(track) = state.current_track() else {
        return "idle: playlist is empty".to_string();
    };
    let info = app.playback_info();
    let label = match app.driver_state() {
        DriverState::Playing => "playing",
        DriverState::Paused | DriverState::Idle => "paused",
    };
    format!(
        "{label} {}/{}: {} - {}  {} / {}",
        state.current_index() + 1,
        state.len(),
        track.artist,
        track.title,
        clock(info.elapsed),
        clock(info.duration),
    )
}

fn songs(tracks: &[Track]) -> Vec<Song> {
    tracks.iter().map(Song::from).collect()
}

/// Run one local command. Returns `true` when shutdown is requested.
fn handle_command<B: AudioBackend, W: Write>(
    cmd: Command,
    settings: &config::Settings,
    app: &mut App<B>,
    search: &dyn MusicSearch,
    state: &mut EventLoopState,
    out: &mut W,
) -> Result<bool> {
    match cmd {
        Command::Transport(action) => app.transport(action),
        Command::Select(i) => app.select(i),
        Command::Remove(i) => app.remove(i),
        Command::Clear => app.clear(),
        Command::Search(query) => {
            match search.search(&query) {
                Ok(found) => {
                    debug!("search `{query}` returned {} track(s)", found.len());
                    state.results = found;
                    state.last_query = Some(query);
                }
                Err(e) => {
                    warn!("search `{query}` failed: {e}");
                    writeln!(out, "search failed: {e}")?;
                    return Ok(false);
                }
            }
            print_results(settings, state, out)?;
        }
        Command::Results => print_results(settings, state, out)?,
        Command::AddResult(i) => match state.results.get(i) {
            Some(track) => app.add(vec![track.clone()]),
            None => writeln!(out, "no search result #{i}")?,
        },
        Command::List => {
            let heading = format!("Playlist ({} tracks)", app.state().len());
            let opts = settings.display.options(Some(&heading));
            write_lines(out, &render_songs(&songs(app.state().tracks()), &opts))?;
        }
        Command::Status => writeln!(out, "{}", status_line(app))?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(true),
    }
    Ok(false)
}

fn print_results<W: Write>(
    settings: &config::Settings,
    state: &EventLoopState,
    out: &mut W,
) -> Result<()> {
    let heading = state
        .last_query
        .as_ref()
        .map(|q| format!("Results for \"{q}\""));
    let opts = settings.display.options(heading.as_deref());
    write_lines(out, &render_songs(&songs(&state.results), &opts))
}

/// Handle one stdin line. Returns `true` when shutdown is requested.
pub fn handle_line<B: AudioBackend, W: Write>(
    line: &str,
    settings: &config::Settings,
    app: &mut App<B>,
    search: &dyn MusicSearch,
    state: &mut EventLoopState,
    out: &mut W,
) -> Result<bool> {
    let quit = match parse_line(line) {
        None => false,
        Some(Input::Directive(d)) => {
            app.handle_directive(d);
            false
        }
        Some(Input::Rejected(reason)) => {
            app.reject(reason);
            false
        }
        Some(Input::Command(cmd)) => handle_command(cmd, settings, app, search, state, out)?,
        Some(Input::Unknown(text)) => {
            writeln!(out, "unknown command `{text}` (try `help`)")?;
            false
        }
    };
    flush_outbound(app, out)?;
    out.flush()?;
    Ok(quit)
}

/// Main loop: applies input lines as they arrive and polls the playback
/// handle every `audio.tick_ms`. Returns when the user quits or stdin closes.
pub fn run<B: AudioBackend, W: Write>(
    settings: &config::Settings,
    app: &mut App<B>,
    search: &dyn MusicSearch,
    control_rx: &Receiver<ControlCmd>,
    out: &mut W,
    state: &mut EventLoopState,
) -> Result<()> {
    let tick = Duration::from_millis(settings.audio.tick_ms);
    flush_outbound(app, out)?;

    loop {
        match control_rx.recv_timeout(tick) {
            Ok(ControlCmd::Line(line)) => {
                if handle_line(&line, settings, app, search, state, out)? {
                    break;
                }
            }
            Ok(ControlCmd::Eof) | Err(RecvTimeoutError::Disconnected) => {
                debug!("input closed");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Input may arrive faster than the tick; poll regardless.
        app.tick();
        flush_outbound(app, out)?;
    }

    app.shutdown();
    flush_outbound(app, out)
}
