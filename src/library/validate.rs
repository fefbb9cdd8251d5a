//! Boundary validation for inbound tracks.
//!
//! serde already guarantees the required fields are present; this layer
//! checks what serde cannot: that locators are real URIs and durations are
//! sane numbers. A batch is accepted whole or not at all.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

use super::model::Track;

const PLAYABLE_SCHEMES: &[&str] = &["http", "https", "file"];

fn invalid(track: &Track, field: &'static str, reason: impl Into<String>) -> Error {
    Error::InvalidTrack {
        title: track.title.clone(),
        field,
        reason: reason.into(),
    }
}

fn parse_uri(track: &Track, field: &'static str, value: &str) -> Result<Url> {
    Url::parse(value.trim()).map_err(|e| invalid(track, field, format!("is not a URI ({e})")))
}

/// Validate a single track.
pub fn validate_track(track: &Track) -> Result<()> {
    let preview = parse_uri(track, "preview", &track.preview)?;
    if !PLAYABLE_SCHEMES.contains(&preview.scheme()) {
        return Err(invalid(
            track,
            "preview",
            format!("has unsupported scheme `{}`", preview.scheme()),
        ));
    }

    parse_uri(track, "link", &track.link)?;

    if let Some(cover) = track.album_cover.as_deref() {
        parse_uri(track, "albumCover", cover)?;
    }

    if let Some(d) = track.duration {
        if Duration::try_from_secs_f64(d).is_err() {
            return Err(invalid(
                track,
                "duration",
                "must be a non-negative number of seconds in range",
            ));
        }
    }

    Ok(())
}

/// Validate every track in `tracks`, stopping at the first failure.
pub fn validate_tracks(tracks: &[Track]) -> Result<()> {
    tracks.iter().try_for_each(validate_track)
}
