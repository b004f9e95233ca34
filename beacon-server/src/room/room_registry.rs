use crate::config::EvictionPolicy;
use crate::room::{Evictor, Room, RoomCommand, RoomHandle};
use beacon_core::RoomId;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::info;

const DEFAULT_ROOM_BUFFER: usize = 256;

/// Process-wide table of running rooms.
///
/// Cloning is cheap and every clone sees the same rooms. Creating a room
/// spawns its event loop, so it must happen inside a tokio runtime.
#[derive(Clone)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, RoomHandle>>,
    eviction: EvictionPolicy,
    room_buffer: usize,
}

impl RoomRegistry {
    pub fn new(eviction: EvictionPolicy, room_buffer: usize) -> Self {
        Self {
            rooms: Arc::new(DashMap::new()),
            eviction,
            room_buffer: room_buffer.max(1),
        }
    }

    pub fn create_room(&self) -> RoomId {
        loop {
            let id = RoomId::new();
            let Entry::Vacant(slot) = self.rooms.entry(id.clone()) else {
                continue;
            };

            let (tx, rx) = mpsc::channel::<RoomCommand>(self.room_buffer);
            let room = Room::new(id.clone(), rx, self.evictor());
            tokio::spawn(room.run());

            slot.insert(RoomHandle::new(id.clone(), tx));
            info!("Created room {}", id);
            return id;
        }
    }

    pub fn find_room(&self, id: &RoomId) -> Option<RoomHandle> {
        self.rooms.get(id).map(|entry| entry.value().clone())
    }

    pub fn remove_room(&self, id: &RoomId) -> Option<RoomHandle> {
        self.rooms.remove(id).map(|(_, handle)| handle)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn downgrade(&self) -> WeakRoomRegistry {
        WeakRoomRegistry {
            rooms: Arc::downgrade(&self.rooms),
            eviction: self.eviction,
            room_buffer: self.room_buffer,
        }
    }

    /// Room tasks only hold a weak registry, so they never keep it alive.
    fn evictor(&self) -> Option<Evictor> {
        match self.eviction {
            EvictionPolicy::Never => None,
            EvictionPolicy::OnHostClose => {
                let registry = self.downgrade();
                Some(Box::new(move |id: &RoomId| {
                    if let Some(registry) = registry.upgrade() {
                        registry.remove_room(id);
                    }
                }))
            }
        }
    }
}

struct WeakRoomRegistry {
    rooms: Weak<DashMap<RoomId, RoomHandle>>,
    eviction: EvictionPolicy,
    room_buffer: usize,
}

impl WeakRoomRegistry {
    fn upgrade(&self) -> Option<RoomRegistry> {
        Some(RoomRegistry {
            rooms: self.rooms.upgrade()?,
            eviction: self.eviction,
            room_buffer: self.room_buffer,
        })
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(EvictionPolicy::default(), DEFAULT_ROOM_BUFFER)
    }
}
