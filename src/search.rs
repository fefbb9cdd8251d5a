//! Free-text music search.
//!
//! The player only needs "query in, tracks out"; `DeezerSearch` speaks the
//! public Deezer search API.

mod deezer;

pub use deezer::DeezerSearch;

use crate::error::Result;
use crate::library::Track;

pub trait MusicSearch {
    fn search(&self, query: &str) -> Result<Vec<Track>>;
}
