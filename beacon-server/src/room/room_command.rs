use crate::transport::Connection;
use beacon_core::{GuestId, RoomId};
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Commands processed, one at a time, by a room's event loop.
#[derive(Debug)]
pub enum RoomCommand {
    /// Claim the host slot.
    AttachHost {
        conn: Arc<dyn Connection>,
        reply: oneshot::Sender<AttachOutcome>,
    },

    /// Join as a guest; the reply carries the id assigned to it.
    AttachGuest {
        conn: Arc<dyn Connection>,
        reply: oneshot::Sender<GuestId>,
    },

    /// Raw frame read from the host.
    HostMessage { data: Bytes },

    /// Raw frame read from a guest.
    GuestMessage { guest_id: GuestId, data: Bytes },

    HostClosed,

    GuestClosed { guest_id: GuestId },

    Snapshot { reply: oneshot::Sender<RoomSnapshot> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    /// The host slot was taken. The connection has been told and closed.
    Rejected,
}

/// Which slot of a room a connection occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Membership {
    Host,
    Guest(GuestId),
}

/// Point-in-time view of a room, taken inside its event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub id: RoomId,
    pub host_attached: bool,
    /// Sorted for stable comparisons.
    pub guests: Vec<GuestId>,
}
