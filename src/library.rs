//! Track model, boundary validation and the read-only song display.
//!
//! Everything that enters the playlist passes through `validate` first;
//! `display` renders lists of songs without any ability to mutate them.

mod display;
mod model;
mod validate;

pub use display::{DisplayOptions, DisplaySize, format_duration, render_songs};
pub use model::{Song, Track};
pub use validate::{validate_track, validate_tracks};

#[cfg(test)]
mod tests;
