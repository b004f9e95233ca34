use crate::error::RelayError;
use crate::room::{AttachOutcome, Membership, RoomCommand, RoomSnapshot};
use crate::transport::Connection;
use beacon_core::{GuestId, Role, RoomId};
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Cloneable address of a running room.
#[derive(Debug, Clone)]
pub struct RoomHandle {
    id: RoomId,
    tx: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    pub fn new(id: RoomId, tx: mpsc::Sender<RoomCommand>) -> Self {
        Self { id, tx }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub async fn attach_host(
        &self,
        conn: Arc<dyn Connection>,
    ) -> Result<AttachOutcome, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::AttachHost { conn, reply }).await?;
        rx.await.map_err(|_| self.closed())
    }

    pub async fn attach_guest(&self, conn: Arc<dyn Connection>) -> Result<GuestId, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::AttachGuest { conn, reply }).await?;
        rx.await.map_err(|_| self.closed())
    }

    /// Attach `conn` in `role`. `Ok(None)` means the host slot was taken.
    pub async fn attach(
        &self,
        role: Role,
        conn: Arc<dyn Connection>,
    ) -> Result<Option<Membership>, RelayError> {
        match role {
            Role::Host => match self.attach_host(conn).await? {
                AttachOutcome::Attached => Ok(Some(Membership::Host)),
                AttachOutcome::Rejected => Ok(None),
            },
            Role::Guest => Ok(Some(Membership::Guest(self.attach_guest(conn).await?))),
        }
    }

    /// Hand a frame read from `member` to the room for routing.
    pub async fn deliver(&self, member: &Membership, data: Bytes) -> Result<(), RelayError> {
        let cmd = match member {
            Membership::Host => RoomCommand::HostMessage { data },
            Membership::Guest(guest_id) => RoomCommand::GuestMessage {
                guest_id: guest_id.clone(),
                data,
            },
        };
        self.send(cmd).await
    }

    /// Report that `member`'s connection is gone. Call once per connection.
    pub async fn disconnect(&self, member: Membership) -> Result<(), RelayError> {
        let cmd = match member {
            Membership::Host => RoomCommand::HostClosed,
            Membership::Guest(guest_id) => RoomCommand::GuestClosed { guest_id },
        };
        self.send(cmd).await
    }

    pub async fn snapshot(&self) -> Result<RoomSnapshot, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| self.closed())
    }

    async fn send(&self, cmd: RoomCommand) -> Result<(), RelayError> {
        self.tx.send(cmd).await.map_err(|_| self.closed())
    }

    fn closed(&self) -> RelayError {
        RelayError::RoomClosed(self.id.clone())
    }
}
