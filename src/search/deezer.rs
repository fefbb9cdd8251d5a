use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::SearchSettings;
use crate::error::{Error, Result};
use crate::library::{Track, validate_track};

use super::MusicSearch;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Hit>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct Hit {
    title: String,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    preview: String,
    link: String,
    artist: Named,
    album: Album,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Album {
    title: String,
    #[serde(default)]
    cover_medium: Option<String>,
}

impl From<Hit> for Track {
    fn from(h: Hit) -> Self {
        Track {
            title: h.title,
            artist: h.artist.name,
            album: h.album.title,
            duration: h.duration,
            preview: h.preview,
            link: h.link,
            album_cover: h.album.cover_medium.filter(|c| !c.is_empty()),
        }
    }
}

/// Turn a raw response body into playable tracks. Hits without a preview,
/// or that fail validation, are skipped.
pub(super) fn parse_response(body: &str) -> Result<Vec<Track>> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| Error::Search(format!("bad response: {e}")))?;

    if let Some(err) = response.error {
        return Err(Error::Search(err.message));
    }

    Ok(response
        .data
        .into_iter()
        .filter(|h| !h.preview.trim().is_empty())
        .map(Track::from)
        .filter(|t| match validate_track(t) {
            Ok(()) => true,
            Err(e) => {
                debug!("skipping search hit: {e}");
                false
            }
        })
        .collect())
}

pub struct DeezerSearch {
    http: Client,
    base_url: String,
    limit: usize,
}

impl DeezerSearch {
    pub fn new(settings: &SearchSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Search(e.to_string()))?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            limit: settings.limit,
        })
    }
}

impl MusicSearch for DeezerSearch {
    fn search(&self, query: &str) -> Result<Vec<Track>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search", self.base_url);
        let limit = self.limit.to_string();
        debug!("searching {url} for {query:?}");
        let body = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| Error::Search(e.to_string()))?;

        let mut tracks = parse_response(&body)?;
        tracks.truncate(self.limit);
        Ok(tracks)
    }
}
