use serde::Deserialize;

use super::model::Song;

/// How much detail each rendered song gets.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplaySize {
    /// One line: title, artist and the optional extras.
    Small,
    /// Title line followed by `artist · album`.
    #[default]
    Medium,
    /// Title, artist and album on their own lines, plus the cover.
    Large,
}

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub show_duration: bool,
    pub show_link: bool,
    pub size: DisplaySize,
    pub heading: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_duration: true,
            show_link: true,
            size: DisplaySize::Medium,
            heading: None,
        }
    }
}

/// Format seconds as `m:ss`. Missing or zero durations produce an empty string.
pub fn format_duration(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() && s >= 1.0 => {
            let total = s as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => String::new(),
    }
}

fn extras(song: &Song, opts: &DisplayOptions) -> Vec<String> {
    let mut parts = Vec::new();
    if opts.show_duration {
        let d = format_duration(song.duration);
        if !d.is_empty() {
            parts.push(d);
        }
    }
    if opts.show_link && !song.link.trim().is_empty() {
        parts.push(song.link.clone());
    }
    parts
}

/// Render `songs` as plain text lines according to `opts`.
pub fn render_songs(songs: &[Song], opts: &DisplayOptions) -> Vec<String> {
    if songs.is_empty() {
        return vec!["No songs to display".to_string()];
    }

    let mut lines = Vec::new();
    if let Some(h) = opts.heading.as_deref().filter(|h| !h.trim().is_empty()) {
        lines.push(h.trim().to_string());
    }

    for (i, song) in songs.iter().enumerate() {
        let extras = extras(song, opts);
        let tail = if extras.is_empty() {
            String::new()
        } else {
            format!("  [{}]", extras.join(" | "))
        };

        match opts.size {
            DisplaySize::Small => {
                lines.push(format!("{:>2}. {} - {}{}", i, song.title, song.artist, tail));
            }
            DisplaySize::Medium => {
                lines.push(format!("{:>2}. {}{}", i, song.title, tail));
                lines.push(format!("    {} · {}", song.artist, song.album));
            }
            DisplaySize::Large => {
                lines.push(format!("{:>2}. {}{}", i, song.title, tail));
                lines.push(format!("    artist: {}", song.artist));
                lines.push(format!("    album:  {}", song.album));
                if let Some(cover) = song.album_cover.as_deref() {
                    lines.push(format!("    cover:  {cover}"));
                }
            }
        }
    }

    lines
}
