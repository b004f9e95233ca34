use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Room-scoped guest identifier assigned by the relay at attach time.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct GuestId(String);

impl GuestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GuestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GuestId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for GuestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
