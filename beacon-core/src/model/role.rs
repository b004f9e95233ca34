use crate::error::RoleParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side a connection takes in a room. Fixed for the connection's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The single peer every guest talks to.
    #[serde(rename = "server")]
    Host,
    #[serde(rename = "client")]
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Host => "server",
            Role::Guest => "client",
        }
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server" => Ok(Role::Host),
            "client" => Ok(Role::Guest),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
