use serde::Deserialize;

use crate::library::{DisplayOptions, DisplaySize};
use crate::playlist::EndOfTrack;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub audio: AudioSettings,
    pub search: SearchSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// What to do when the only track in the playlist finishes.
    pub end_of_track: EndOfTrackSetting,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndOfTrackSetting {
    #[default]
    #[serde(alias = "stop-single", alias = "no-loop")]
    Stop,
    #[serde(alias = "repeat", alias = "loop-one", alias = "repeat-one")]
    Loop,
}

impl From<EndOfTrackSetting> for EndOfTrack {
    fn from(s: EndOfTrackSetting) -> Self {
        match s {
            EndOfTrackSetting::Stop => EndOfTrack::Stop,
            EndOfTrackSetting::Loop => EndOfTrack::Loop,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendSetting {
    /// Use the sound card, falling back to silent if none is available.
    #[default]
    Auto,
    Silent,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub backend: BackendSetting,
    /// How often the playback handle is polled (milliseconds).
    pub tick_ms: u64,
    /// Track length assumed until the source reports its own.
    pub fallback_duration_secs: u64,
    /// Timeout for downloading a remote preview (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            backend: BackendSetting::Auto,
            tick_ms: 200,
            fallback_duration_secs: 30,
            fetch_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Base URL of the Deezer-compatible search API.
    pub base_url: String,
    /// Maximum number of results kept per query.
    pub limit: usize,
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.deezer.com".to_string(),
            limit: 10,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_duration: bool,
    pub show_link: bool,
    pub size: DisplaySize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_duration: true,
            show_link: true,
            size: DisplaySize::Medium,
        }
    }
}

impl DisplaySettings {
    /// Display options for a list titled `heading`.
    pub fn options(&self, heading: Option<&str>) -> DisplayOptions {
        DisplayOptions {
            show_duration: self.show_duration,
            show_link: self.show_link,
            size: self.size,
            heading: heading.map(str::to_string),
        }
    }
}
