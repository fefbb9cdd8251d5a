//! Recording backend for tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

use super::backend::{AudioBackend, Voice};
use super::types::VoiceEvent;

#[derive(Default)]
pub struct MockShared {
    pub log: Vec<String>,
    pub refuse: Vec<String>,
    pub queued: Vec<VoiceEvent>,
    pub live: usize,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    pub shared: Rc<RefCell<MockShared>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<String> {
        self.shared.borrow().log.clone()
    }

    pub fn clear_log(&self) {
        self.shared.borrow_mut().log.clear();
    }

    /// Number of voices opened and not yet stopped or dropped.
    pub fn live(&self) -> usize {
        self.shared.borrow().live
    }

    /// Make `play` fail for `source`.
    pub fn refuse(&self, source: &str) {
        self.shared.borrow_mut().refuse.push(source.to_string());
    }

    /// Hand `event` to whichever voice polls next.
    pub fn emit(&self, event: VoiceEvent) {
        self.shared.borrow_mut().queued.push(event);
    }
}

impl AudioBackend for MockBackend {
    type Voice = MockVoice;

    fn open(&mut self, source: &str) -> MockVoice {
        let mut s = self.shared.borrow_mut();
        s.live += 1;
        s.log.push(format!("open {source}"));
        MockVoice {
            source: source.to_string(),
            shared: self.shared.clone(),
            released: false,
        }
    }
}

pub struct MockVoice {
    source: String,
    shared: Rc<RefCell<MockShared>>,
    released: bool,
}

impl MockVoice {
    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.shared.borrow_mut().live -= 1;
        }
    }
}

impl Voice for MockVoice {
    fn source(&self) -> &str {
        &self.source
    }

    fn play(&mut self) -> Result<()> {
        let mut s = self.shared.borrow_mut();
        if s.refuse.contains(&self.source) {
            s.log.push(format!("refuse {}", self.source));
            return Err(Error::Audio("playback refused".into()));
        }
        s.log.push(format!("play {}", self.source));
        Ok(())
    }

    fn pause(&mut self) {
        self.shared
            .borrow_mut()
            .log
            .push(format!("pause {}", self.source));
    }

    fn stop(&mut self) {
        self.shared
            .borrow_mut()
            .log
            .push(format!("stop {}", self.source));
        self.release();
    }

    fn poll(&mut self) -> Vec<VoiceEvent> {
        std::mem::take(&mut self.shared.borrow_mut().queued)
    }
}

impl Drop for MockVoice {
    fn drop(&mut self) {
        self.release();
    }
}
