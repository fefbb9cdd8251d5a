use serde::{Deserialize, Serialize};

use crate::library::Track;

/// Transport control accepted from both the controller and the local user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportAction {
    Play,
    Pause,
    Toggle,
    Next,
    Previous,
}

/// What happens when the last remaining track of a one-track playlist ends.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EndOfTrack {
    /// Advance, but only keep playing if there is another track to go to.
    #[default]
    Stop,
    /// Advance and keep playing, restarting a lone track from the top.
    Loop,
}

/// The externally published view of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tracks: Vec<Track>,
    pub current_index: usize,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistState {
    tracks: Vec<Track>,
    current_index: usize,
    is_playing: bool,
    // Bumped whenever the playback handle has to be released even if the
    // current preview source stays the same.
    epoch: u64,
}

impl PlaylistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store, clamping `current_index` into range.
    pub fn with_tracks(tracks: Vec<Track>, current_index: usize, is_playing: bool) -> Self {
        let current_index = if current_index < tracks.len() {
            current_index
        } else {
            0
        };
        let is_playing = is_playing && !tracks.is_empty();
        Self {
            tracks,
            current_index,
            is_playing,
            epoch: 0,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The track the playback handle should be bound to, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tracks: self.tracks.clone(),
            current_index: self.current_index,
            is_playing: self.is_playing,
        }
    }

    fn release_handle(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Append `tracks` in order. Index and play flag are untouched.
    pub fn add_tracks(&mut self, tracks: impl IntoIterator<Item = Track>) {
        self.tracks.extend(tracks);
    }

    /// Remove the track at `index`. Returns `false` (and changes nothing)
    /// when `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }

        self.tracks.remove(index);

        if index == self.current_index {
            self.current_index = 0;
            self.is_playing = false;
            self.release_handle();
        } else if index < self.current_index {
            self.current_index -= 1;
        }
        true
    }

    /// Replace the whole list. An empty `tracks` clears the playlist.
    pub fn replace_all(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.current_index = 0;
        self.is_playing = false;
        self.release_handle();
    }

    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Apply a transport control. Returns whether the state changed.
    ///
    /// `next`/`previous` rotate the index and keep the play flag. Nothing
    /// can start playing from an empty list.
    pub fn apply_transport(&mut self, action: TransportAction) -> bool {
        let before = (self.current_index, self.is_playing);
        let len = self.tracks.len();

        match action {
            TransportAction::Play => self.is_playing = !self.is_empty(),
            TransportAction::Pause => self.is_playing = false,
            TransportAction::Toggle => self.is_playing = !self.is_playing && !self.is_empty(),
            TransportAction::Next => {
                if len > 0 {
                    self.current_index = (self.current_index + 1) % len;
                }
            }
            TransportAction::Previous => {
                if len > 0 {
                    self.current_index = (self.current_index + len - 1) % len;
                }
            }
        }

        before != (self.current_index, self.is_playing)
    }

    /// Jump to `index` and start playing. Out of range is a no-op.
    pub fn select_and_play(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }
        self.current_index = index;
        self.is_playing = true;
        true
    }

    /// Handle the current track finishing on its own.
    pub fn finish_current(&mut self, policy: EndOfTrack) {
        if self.is_empty() {
            return;
        }
        let len = self.tracks.len();
        self.current_index = (self.current_index + 1) % len;
        self.is_playing = match policy {
            EndOfTrack::Stop => len > 1,
            EndOfTrack::Loop => true,
        };
        self.release_handle();
    }
}
