use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A playable track as it travels over the wire and sits in the playlist.
///
/// Identity is positional: two tracks with identical fields are only told
/// apart by where they sit in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in seconds, when the source knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// The playable audio locator.
    pub preview: String,
    /// Canonical page for the track.
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_cover: Option<String>,
}

impl Track {
    /// `duration` as a `Duration`. Negative, non-finite and out-of-range
    /// values yield `None`.
    pub fn length(&self) -> Option<Duration> {
        self.duration
            .and_then(|d| Duration::try_from_secs_f64(d).ok())
    }
}

/// The display-only record used for search results and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_cover: Option<String>,
}

impl From<&Track> for Song {
    fn from(t: &Track) -> Self {
        Self {
            title: t.title.clone(),
            artist: t.artist.clone(),
            album: t.album.clone(),
            duration: t.duration,
            link: t.link.clone(),
            album_cover: t.album_cover.clone(),
        }
    }
}
