use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::library::{Track, validate_tracks};
use crate::playlist::TransportAction;

/// `addTrack` accepts either a single track object or an array of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrackBatch {
    One(Track),
    Many(Vec<Track>),
}

// Picks the variant from the JSON shape so a malformed track reports its own
// field error rather than a generic untagged mismatch.
impl<'de> Deserialize<'de> for TrackBatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let batch = if value.is_array() {
            serde_json::from_value(value).map(TrackBatch::Many)
        } else {
            serde_json::from_value(value).map(TrackBatch::One)
        };
        batch.map_err(serde::de::Error::custom)
    }
}

impl TrackBatch {
    pub fn into_vec(self) -> Vec<Track> {
        match self {
            TrackBatch::One(t) => vec![t],
            TrackBatch::Many(v) => v,
        }
    }

    fn as_slice(&self) -> &[Track] {
        match self {
            TrackBatch::One(t) => std::slice::from_ref(t),
            TrackBatch::Many(v) => v,
        }
    }
}

/// The directive fields, named as they appear on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectiveField {
    ReplacePlaylist,
    AddTrack,
    RemoveIndex,
    Action,
}

/// One envelope from the controller. Every field is optional and acted on
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Directive {
    /// Monotonic sequence number used to drop re-sent envelopes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_track: Option<TrackBatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<TransportAction>,
    /// Replaces the playlist wholesale; an empty list clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_playlist: Option<Vec<Track>>,
}

impl Directive {
    /// Parse and validate one JSON envelope.
    pub fn parse(line: &str) -> Result<Self> {
        let directive: Directive = serde_json::from_str(line)?;
        directive.validate()?;
        Ok(directive)
    }

    /// Validate every track the envelope carries. Nothing is applied unless
    /// the whole envelope passes.
    pub fn validate(&self) -> Result<()> {
        if let Some(batch) = &self.add_track {
            validate_tracks(batch.as_slice())?;
        }
        if let Some(tracks) = &self.replace_playlist {
            validate_tracks(tracks)?;
        }
        Ok(())
    }

    /// The fields present, in the order they are applied.
    pub fn fields(&self) -> Vec<DirectiveField> {
        let mut fields = Vec::new();
        if self.replace_playlist.is_some() {
            fields.push(DirectiveField::ReplacePlaylist);
        }
        if self.add_track.is_some() {
            fields.push(DirectiveField::AddTrack);
        }
        if self.remove_index.is_some() {
            fields.push(DirectiveField::RemoveIndex);
        }
        if self.action.is_some() {
            fields.push(DirectiveField::Action);
        }
        fields
    }
}
