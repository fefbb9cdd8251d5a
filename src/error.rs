//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A track failed boundary validation.
    #[error("invalid track `{title}`: {field} {reason}")]
    InvalidTrack {
        title: String,
        field: &'static str,
        reason: String,
    },

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// The audio backend could not load or start a source.
    #[error("audio error: {0}")]
    Audio(String),

    #[error("search failed: {0}")]
    Search(String),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
