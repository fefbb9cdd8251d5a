//! The player model: `App`.

use log::{info, warn};

use crate::audio::{
    AudioBackend, DriverState, PlaybackDriver, PlaybackInfo, PollOutcome, SyncOutcome,
};
use crate::directive::Directive;
use crate::library::Track;
use crate::playlist::{EndOfTrack, PlaylistState, TransportAction};
use crate::reconcile::{Outbound, Reconciler};

/// The player.
///
/// Owns the authoritative playlist. After every mutation the driver is
/// re-synced and, if anything changed, the new snapshot is queued for the
/// controller.
pub struct App<B: AudioBackend> {
    state: PlaylistState,
    reconciler: Reconciler,
    driver: PlaybackDriver<B>,
    end_of_track: EndOfTrack,
    outbox: Vec<Outbound>,
}

impl<B: AudioBackend> App<B> {
    /// Create the player around a seeded (or empty) `state`. The initial
    /// snapshot is queued right away.
    pub fn new(state: PlaylistState, driver: PlaybackDriver<B>, end_of_track: EndOfTrack) -> Self {
        let mut app = Self {
            state,
            reconciler: Reconciler::new(),
            driver,
            end_of_track,
            outbox: Vec::new(),
        };
        app.settle();
        app
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    pub fn playback_info(&self) -> &PlaybackInfo {
        self.driver.info()
    }

    #[cfg(test)]
    pub(crate) fn driver(&self) -> &PlaybackDriver<B> {
        &self.driver
    }

    /// Messages waiting to be written to the controller.
    pub fn drain_outbound(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.outbox)
    }

    /// Re-sync the driver and queue a snapshot if the state changed.
    fn settle(&mut self) {
        if self.driver.sync(&self.state) == SyncOutcome::StartFailed {
            // Keep the published state honest: nothing is actually playing.
            self.state.apply_transport(TransportAction::Pause);
            self.driver.sync(&self.state);
        }
        if let Some(msg) = self.reconciler.publish(&self.state) {
            self.outbox.push(msg);
        }
    }

    /// Apply a directive from the controller.
    pub fn handle_directive(&mut self, directive: Directive) {
        let Some(ack) = self.reconciler.apply(&mut self.state, directive) else {
            return;
        };
        self.settle();
        self.outbox.push(ack);
    }

    /// Tell the controller an input line was refused.
    pub fn reject(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("rejected input: {reason}");
        self.outbox.push(Outbound::Rejected { reason });
    }

    pub fn transport(&mut self, action: TransportAction) {
        self.state.apply_transport(action);
        self.settle();
    }

    /// Jump to `index` and play it.
    pub fn select(&mut self, index: usize) {
        self.state.select_and_play(index);
        self.settle();
    }

    pub fn remove(&mut self, index: usize) {
        self.state.remove_at(index);
        self.settle();
    }

    pub fn add(&mut self, tracks: Vec<Track>) {
        self.state.add_tracks(tracks);
        self.settle();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.settle();
    }

    /// Poll the playback handle; advance when the current track finished.
    pub fn tick(&mut self) {
        match self.driver.poll() {
            PollOutcome::Quiet => {}
            PollOutcome::Ended => {
                if let Some(t) = self.state.current_track() {
                    info!("finished {} - {}", t.artist, t.title);
                }
                self.state.finish_current(self.end_of_track);
                self.settle();
            }
            PollOutcome::Failed => {
                self.state.apply_transport(TransportAction::Pause);
                self.settle();
            }
        }
    }

    /// Release the playback handle.
    pub fn shutdown(&mut self) {
        self.driver.release();
    }
}
