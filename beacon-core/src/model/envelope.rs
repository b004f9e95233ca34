use crate::error::EnvelopeError;
use crate::model::guest::GuestId;
use serde_json::{Map, Value};

/// Name of the reserved routing field on the wire.
pub const GUEST_ID_FIELD: &str = "guestId";

/// A signaling message as seen by the relay.
///
/// Only `guestId` is understood. The object is kept as read, so every other
/// field is written back out with its original key order and number text.
/// Anything that is not a JSON object, or whose `guestId` is neither a
/// string nor `null`, fails to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    guest_id: Option<GuestId>,
    fields: Map<String, Value>,
}

impl Envelope {
    pub fn parse(raw: &[u8]) -> Result<Self, EnvelopeError> {
        let fields: Map<String, Value> = serde_json::from_slice(raw)?;

        let guest_id = match fields.get(GUEST_ID_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(GuestId::from(id.as_str())),
            Some(other) => return Err(EnvelopeError::InvalidGuestId(other.clone())),
        };

        Ok(Self { guest_id, fields })
    }

    pub fn guest_id(&self) -> Option<&GuestId> {
        self.guest_id.as_ref()
    }

    /// All fields of the object, `guestId` included when present.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Stamp the sender's id, replacing whatever the sender put there.
    /// An existing `guestId` keeps its position; a new one goes last.
    pub fn with_guest_id(mut self, guest_id: GuestId) -> Self {
        self.fields.insert(
            GUEST_ID_FIELD.to_string(),
            Value::String(guest_id.to_string()),
        );
        self.guest_id = Some(guest_id);
        self
    }

    pub fn to_text(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}
