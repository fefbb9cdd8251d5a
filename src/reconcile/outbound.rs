use serde::Serialize;

use crate::directive::DirectiveField;
use crate::playlist::Snapshot;

/// Messages written back to the controller, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    /// Full playlist state after a change.
    State(Snapshot),
    /// The listed fields of the envelope numbered `seq` were applied and
    /// may now be cleared by the controller.
    Consumed {
        #[serde(skip_serializing_if = "Option::is_none")]
        seq: Option<u64>,
        fields: Vec<DirectiveField>,
    },
    /// An input line was refused as a whole.
    Rejected { reason: String },
}

impl Outbound {
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
