//! Small audio types shared by the backends and the driver.

use std::time::Duration;

/// Something a live voice noticed since it was last polled.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceEvent {
    /// The source was decoded; `duration` is its total length if known.
    Loaded { duration: Option<Duration> },
    /// Current playback position.
    Progress { elapsed: Duration },
    /// The source played through to the end.
    Ended,
    /// Loading failed after playback was requested.
    Failed { reason: String },
}

/// What a driver poll found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Quiet,
    /// The current track finished on its own.
    Ended,
    /// The current track could not be started after all.
    Failed,
}

/// Externally visible state of the playback driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriverState {
    /// No current track, no handle.
    Idle,
    Paused,
    Playing,
}

/// Result of reconciling the driver with the playlist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Settled,
    /// The handle refused to start; the driver stayed paused.
    StartFailed,
}

#[derive(Debug, Clone, PartialEq)]
/// Presentation-side playback information.
pub struct PlaybackInfo {
    /// Playlist index the handle is bound to (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total length shown for the current track.
    pub duration: Duration,
    /// Whether the handle is currently playing.
    pub playing: bool,
}

impl PlaybackInfo {
    pub fn idle(duration: Duration) -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            duration,
            playing: false,
        }
    }
}
