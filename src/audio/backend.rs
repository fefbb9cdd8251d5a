use crate::error::Result;

use super::types::VoiceEvent;

/// One playable handle bound to a single source.
///
/// Dropping a voice must release it; its events go with it.
pub trait Voice {
    /// The locator this voice was opened on.
    fn source(&self) -> &str;
    /// Start or resume playback. Loading failures already known surface
    /// here; later ones arrive as `VoiceEvent::Failed`.
    fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    /// Stop for good. The voice is discarded afterwards.
    fn stop(&mut self);
    /// Drain whatever happened since the last poll.
    fn poll(&mut self) -> Vec<VoiceEvent>;
}

/// Factory for voices. Opening never fails; a bad source only shows up
/// once the voice is asked to play.
pub trait AudioBackend {
    type Voice: Voice;

    fn open(&mut self, source: &str) -> Self::Voice;
}
