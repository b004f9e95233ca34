use thiserror::Error;

/// Failure to read an inbound message as an [`Envelope`](crate::Envelope).
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Not a JSON object.
    #[error("malformed envelope: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`guestId` must be a string, got {0}")]
    InvalidGuestId(serde_json::Value),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role `{0}`, expected `server` or `client`")]
pub struct RoleParseError(pub String);
