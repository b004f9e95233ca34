use crate::error::RelayError;
use std::fmt;

/// Outbound side of a peer connection, as the room sees it.
///
/// Both calls are fire-and-forget: they queue and return immediately, so a
/// slow peer never holds up the room. Inbound traffic does not go through
/// this trait; the transport reads it and forwards it to the room itself.
pub trait Connection: fmt::Debug + Send + Sync + 'static {
    fn send(&self, text: String) -> Result<(), RelayError>;

    /// Ask the transport to close. Safe to call more than once.
    fn close(&self);
}
