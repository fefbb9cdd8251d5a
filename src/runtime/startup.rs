use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::library::{Track, validate_tracks};
use crate::playlist::PlaylistState;

/// Initial playlist, as read from a `--seed` file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Seed {
    tracks: Vec<Track>,
    #[serde(default)]
    current_index: usize,
    #[serde(default)]
    is_playing: bool,
}

fn parse_seed(body: &str) -> Result<PlaylistState> {
    let seed: Seed = serde_json::from_str(body)?;
    validate_tracks(&seed.tracks)?;
    Ok(PlaylistState::with_tracks(
        seed.tracks,
        seed.current_index,
        seed.is_playing,
    ))
}

/// Build the starting playlist: seeded from `path` when given, else empty.
pub fn initial_state(path: Option<&Path>) -> Result<PlaylistState> {
    let Some(path) = path else {
        return Ok(PlaylistState::new());
    };
    let state = parse_seed(&std::fs::read_to_string(path)?)?;
    info!(
        "seeded {} track(s) from {}",
        state.len(),
        path.display()
    );
    Ok(state)
}
