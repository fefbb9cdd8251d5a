//! A backend that produces no sound.
//!
//! Voices keep a wall-clock position and report completion once a fixed
//! track length has elapsed, so the playlist behaves as it would with real
//! audio. Used when there is no output device or `--silent` is given.

use std::time::{Duration, Instant};

use crate::error::Result;

use super::backend::{AudioBackend, Voice};
use super::types::VoiceEvent;

pub struct SilentBackend {
    length: Duration,
}

impl SilentBackend {
    pub fn new(length: Duration) -> Self {
        Self { length }
    }
}

impl AudioBackend for SilentBackend {
    type Voice = SilentVoice;

    fn open(&mut self, source: &str) -> SilentVoice {
        SilentVoice {
            source: source.to_string(),
            length: self.length,
            started_at: None,
            accumulated: Duration::ZERO,
            announced: false,
            ended: false,
        }
    }
}

pub struct SilentVoice {
    source: String,
    length: Duration,
    // Start time of the current run and time accumulated before it.
    started_at: Option<Instant>,
    accumulated: Duration,
    announced: bool,
    ended: bool,
}

impl SilentVoice {
    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }
}

impl Voice for SilentVoice {
    fn source(&self) -> &str {
        &self.source
    }

    fn play(&mut self) -> Result<()> {
        if self.started_at.is_none() && !self.ended {
            self.started_at = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    fn stop(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    fn poll(&mut self) -> Vec<VoiceEvent> {
        let mut events = Vec::new();
        if !self.announced {
            self.announced = true;
            events.push(VoiceEvent::Loaded {
                duration: Some(self.length),
            });
        }
        if self.started_at.is_some() && !self.ended {
            let elapsed = self.elapsed().min(self.length);
            events.push(VoiceEvent::Progress { elapsed });
            if elapsed >= self.length {
                self.ended = true;
                self.pause();
                events.push(VoiceEvent::Ended);
            }
        }
        events
    }
}
