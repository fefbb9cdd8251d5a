//! The playlist store: the single authoritative source of truth.
//!
//! Every mutation keeps three invariants: the index points inside the list
//! (or is 0 when the list is empty), nothing plays from an empty list, and
//! removing the playing track stops playback.

mod state;

pub use state::*;
