use serde::{Deserialize, Serialize};

/// Messages the relay itself writes onto a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum RelayNotice {
    /// Sent once before the relay closes a connection it refused.
    Error { message: String },
}

impl RelayNotice {
    pub fn host_conflict() -> Self {
        RelayNotice::Error {
            message: "room already has a host".to_string(),
        }
    }

    pub fn to_text(&self) -> String {
        // Serializing a tagged enum of plain strings cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
