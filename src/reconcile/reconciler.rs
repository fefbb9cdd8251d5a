use log::debug;

use crate::directive::Directive;
use crate::playlist::{PlaylistState, Snapshot};

use super::outbound::Outbound;

/// Applies directives to the store exactly once and decides when the
/// store's snapshot must be published.
#[derive(Debug, Default)]
pub struct Reconciler {
    last_seq: Option<u64>,
    last_published: Option<Snapshot>,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest sequence number applied so far.
    #[cfg(test)]
    pub(crate) fn last_seq(&self) -> Option<u64> {
        self.last_seq
    }

    /// Apply `directive` to `state`.
    ///
    /// Returns the acknowledgement to send, or `None` when the envelope is a
    /// re-send of one already applied.
    pub fn apply(&mut self, state: &mut PlaylistState, directive: Directive) -> Option<Outbound> {
        if let (Some(seq), Some(last)) = (directive.seq, self.last_seq) {
            if seq <= last {
                debug!("dropping duplicate directive seq={seq} (last applied {last})");
                return None;
            }
        }

        let fields = directive.fields();
        let Directive {
            seq,
            add_track,
            remove_index,
            action,
            replace_playlist,
        } = directive;

        if let Some(tracks) = replace_playlist {
            debug!("replacing playlist with {} track(s)", tracks.len());
            state.replace_all(tracks);
        }
        if let Some(batch) = add_track {
            let tracks = batch.into_vec();
            debug!("adding {} track(s)", tracks.len());
            state.add_tracks(tracks);
        }
        if let Some(index) = remove_index {
            if !state.remove_at(index) {
                debug!("ignoring removeIndex {index}: playlist has {} track(s)", state.len());
            }
        }
        if let Some(action) = action {
            state.apply_transport(action);
        }

        if seq.is_some() {
            self.last_seq = seq;
        }

        Some(Outbound::Consumed { seq, fields })
    }

    /// The state message to publish, if `state` differs from what was last
    /// published.
    pub fn publish(&mut self, state: &PlaylistState) -> Option<Outbound> {
        let snapshot = state.snapshot();
        if self.last_published.as_ref() == Some(&snapshot) {
            return None;
        }
        self.last_published = Some(snapshot.clone());
        Some(Outbound::State(snapshot))
    }
}
