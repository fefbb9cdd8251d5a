//! Audio playback: backend abstraction, concrete backends and the
//! playback driver that binds the playlist's current track to one handle.

mod backend;
mod driver;
mod silent;
mod sink;
mod types;

pub use backend::{AudioBackend, Voice};
pub use driver::PlaybackDriver;
pub use silent::SilentBackend;
pub use sink::RodioBackend;
pub use types::*;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod tests;
