//! Inbound directives: the one-shot instructions an outside controller
//! sends to mutate the playlist.

mod envelope;

pub use envelope::*;
