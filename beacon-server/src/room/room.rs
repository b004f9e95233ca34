use crate::room::{AttachOutcome, RoomCommand, RoomSnapshot};
use crate::transport::Connection;
use beacon_core::{Envelope, GuestId, RelayNotice, RoomId};
use bytes::Bytes;
use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Called once when a room decides to leave the registry.
pub type Evictor = Box<dyn FnOnce(&RoomId) + Send + 'static>;

/// Room actor. Owns the host slot and the guest map. Commands are handled
/// one at a time, so attach, routing and cleanup never interleave.
pub struct Room {
    id: RoomId,

    /// At most one host at a time.
    host: Option<Arc<dyn Connection>>,

    guests: HashMap<GuestId, Arc<dyn Connection>>,

    command_rx: mpsc::Receiver<RoomCommand>,

    /// Present only when the room should remove itself after the host leaves.
    evictor: Option<Evictor>,
}

impl Room {
    pub fn new(
        id: RoomId,
        command_rx: mpsc::Receiver<RoomCommand>,
        evictor: Option<Evictor>,
    ) -> Self {
        Self {
            id,
            host: None,
            guests: HashMap::new(),
            command_rx,
            evictor,
        }
    }

    /// Event loop. Runs until every handle is dropped or the room evicts itself.
    pub async fn run(mut self) {
        info!("Room {} event loop started", self.id);

        while let Some(cmd) = self.command_rx.recv().await {
            if self.handle_command(cmd).is_break() {
                break;
            }
        }

        info!("Room {} event loop finished", self.id);
    }

    fn handle_command(&mut self, cmd: RoomCommand) -> ControlFlow<()> {
        match cmd {
            RoomCommand::AttachHost { conn, reply } => {
                let _ = reply.send(self.attach_host(conn));
            }
            RoomCommand::AttachGuest { conn, reply } => {
                let _ = reply.send(self.attach_guest(conn));
            }
            RoomCommand::HostMessage { data } => self.on_host_message(&data),
            RoomCommand::GuestMessage { guest_id, data } => self.on_guest_message(guest_id, &data),
            RoomCommand::HostClosed => return self.on_host_close(),
            RoomCommand::GuestClosed { guest_id } => self.on_guest_close(&guest_id),
            RoomCommand::Snapshot { reply } => {
                let _ = reply.send(self.snapshot());
            }
        }
        ControlFlow::Continue(())
    }

    fn attach_host(&mut self, conn: Arc<dyn Connection>) -> AttachOutcome {
        if self.host.is_some() {
            warn!("Room {} already has a host, rejecting new host", self.id);
            if let Err(e) = conn.send(RelayNotice::host_conflict().to_text()) {
                debug!("Could not notify rejected host in room {}: {}", self.id, e);
            }
            conn.close();
            return AttachOutcome::Rejected;
        }

        info!("Host attached to room {}", self.id);
        self.host = Some(conn);
        AttachOutcome::Attached
    }

    fn attach_guest(&mut self, conn: Arc<dyn Connection>) -> GuestId {
        let mut guest_id = GuestId::new();
        while self.guests.contains_key(&guest_id) {
            guest_id = GuestId::new();
        }

        info!("Guest {} attached to room {}", guest_id, self.id);
        self.guests.insert(guest_id.clone(), conn);
        guest_id
    }

    /// Host frames must name a guest; they are forwarded byte for byte.
    fn on_host_message(&self, data: &Bytes) {
        let envelope = match Envelope::parse(data) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Dropping message from host of room {}: {}", self.id, e);
                return;
            }
        };

        let Some(guest_id) = envelope.guest_id() else {
            debug!("Host message in room {} has no guestId, dropping", self.id);
            return;
        };

        let Some(guest) = self.guests.get(guest_id) else {
            warn!("Guest {} is not in room {}, dropping host message", guest_id, self.id);
            return;
        };

        // Parsing succeeded, so the frame is valid UTF-8. Binary frames are
        // forwarded as text frames carrying the same bytes.
        let text = String::from_utf8_lossy(data).into_owned();
        if let Err(e) = guest.send(text) {
            warn!("Failed to forward to guest {} in room {}: {}", guest_id, self.id, e);
        }
    }

    /// Guest frames go to the host with `guestId` set to the sender.
    fn on_guest_message(&self, guest_id: GuestId, data: &Bytes) {
        let envelope = match Envelope::parse(data) {
            Ok(envelope) => envelope.with_guest_id(guest_id.clone()),
            Err(e) => {
                warn!("Dropping message from guest {} in room {}: {}", guest_id, self.id, e);
                return;
            }
        };

        let Some(host) = &self.host else {
            warn!("No host in room {}, dropping message from guest {}", self.id, guest_id);
            return;
        };

        let text = match envelope.to_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to encode message from guest {}: {}", guest_id, e);
                return;
            }
        };

        if let Err(e) = host.send(text) {
            warn!(
                "Failed to forward guest {} message to host of room {}: {}",
                guest_id, self.id, e
            );
        }
    }

    /// A room cannot work without its host: every guest is closed and dropped.
    fn on_host_close(&mut self) -> ControlFlow<()> {
        if self.host.take().is_none() {
            debug!("Host close for room {} with no host attached", self.id);
            return ControlFlow::Continue(());
        }

        info!("Host left room {}, evicting {} guest(s)", self.id, self.guests.len());
        for (_, guest) in self.guests.drain() {
            guest.close();
        }

        match self.evictor.take() {
            Some(evict) => {
                info!("Evicting room {}", self.id);
                evict(&self.id);
                ControlFlow::Break(())
            }
            None => ControlFlow::Continue(()),
        }
    }

    fn on_guest_close(&mut self, guest_id: &GuestId) {
        if self.guests.remove(guest_id).is_some() {
            info!("Guest {} left room {}", guest_id, self.id);
        }
    }

    fn snapshot(&self) -> RoomSnapshot {
        let mut guests: Vec<GuestId> = self.guests.keys().cloned().collect();
        guests.sort();

        RoomSnapshot {
            id: self.id.clone(),
            host_attached: self.host.is_some(),
            guests,
        }
    }
}
