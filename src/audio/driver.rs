//! The playback driver: keeps exactly one voice bound to the playlist's
//! current track and follows its play flag.
//!
//! A voice is tied to a binding of `(load epoch, preview source)`. Whenever
//! the binding changes the old voice is stopped and dropped before a new
//! one is opened, so there is never more than one live handle.

use std::time::Duration;

use log::{debug, warn};

use crate::playlist::PlaylistState;

use super::backend::{AudioBackend, Voice};
use super::types::{DriverState, PlaybackInfo, PollOutcome, SyncOutcome, VoiceEvent};

struct Loaded<V> {
    epoch: u64,
    voice: V,
    playing: bool,
}

pub struct PlaybackDriver<B: AudioBackend> {
    backend: B,
    loaded: Option<Loaded<B::Voice>>,
    info: PlaybackInfo,
    fallback_duration: Duration,
}

impl<B: AudioBackend> PlaybackDriver<B> {
    /// `fallback_duration` is shown until a source reports its real length.
    pub fn new(backend: B, fallback_duration: Duration) -> Self {
        Self {
            backend,
            loaded: None,
            info: PlaybackInfo::idle(fallback_duration),
            fallback_duration,
        }
    }

    pub fn state(&self) -> DriverState {
        match &self.loaded {
            None => DriverState::Idle,
            Some(l) if l.playing => DriverState::Playing,
            Some(_) => DriverState::Paused,
        }
    }

    pub fn info(&self) -> &PlaybackInfo {
        &self.info
    }

    /// The source of the live voice, if any.
    #[cfg(test)]
    pub(crate) fn bound_source(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.voice.source())
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Stop and drop the live voice.
    pub fn release(&mut self) {
        if let Some(mut loaded) = self.loaded.take() {
            debug!("releasing voice for {}", loaded.voice.source());
            loaded.voice.stop();
        }
        self.info = PlaybackInfo::idle(self.fallback_duration);
    }

    /// Bring the voice in line with `state`.
    pub fn sync(&mut self, state: &PlaylistState) -> SyncOutcome {
        let Some(track) = state.current_track() else {
            if self.loaded.is_some() {
                self.release();
            }
            return SyncOutcome::Settled;
        };

        let epoch = state.epoch();
        let rebind = match &self.loaded {
            Some(l) => l.epoch != epoch || l.voice.source() != track.preview,
            None => true,
        };

        if rebind {
            self.release();
            debug!("opening voice for {}", track.preview);
            let voice = self.backend.open(&track.preview);
            self.loaded = Some(Loaded {
                epoch,
                voice,
                playing: false,
            });
            self.info.duration = track.length().unwrap_or(self.fallback_duration);
        }
        self.info.index = Some(state.current_index());

        let Some(loaded) = self.loaded.as_mut() else {
            return SyncOutcome::Settled;
        };

        if state.is_playing() && !loaded.playing {
            if let Err(e) = loaded.voice.play() {
                warn!("could not start {}: {e}", loaded.voice.source());
                return SyncOutcome::StartFailed;
            }
            loaded.playing = true;
        } else if !state.is_playing() && loaded.playing {
            loaded.voice.pause();
            loaded.playing = false;
        }
        self.info.playing = loaded.playing;

        SyncOutcome::Settled
    }

    /// Poll the live voice.
    pub fn poll(&mut self) -> PollOutcome {
        let Some(loaded) = self.loaded.as_mut() else {
            return PollOutcome::Quiet;
        };

        let mut outcome = PollOutcome::Quiet;
        for event in loaded.voice.poll() {
            match event {
                VoiceEvent::Loaded { duration } => {
                    if let Some(d) = duration.filter(|d| !d.is_zero()) {
                        self.info.duration = d;
                    }
                }
                VoiceEvent::Progress { elapsed } => self.info.elapsed = elapsed,
                VoiceEvent::Ended => {
                    debug!("{} ended", loaded.voice.source());
                    outcome = PollOutcome::Ended;
                }
                VoiceEvent::Failed { reason } => {
                    warn!("could not start {}: {reason}", loaded.voice.source());
                    outcome = PollOutcome::Failed;
                }
            }
        }

        if outcome != PollOutcome::Quiet {
            loaded.playing = false;
            self.info.playing = false;
        }
        outcome
    }
}

impl<B: AudioBackend> Drop for PlaybackDriver<B> {
    fn drop(&mut self) {
        self.release();
    }
}
