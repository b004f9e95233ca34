use crate::config::ServerConfig;
use crate::room::RoomRegistry;

/// Shared state behind every HTTP and WebSocket handler.
#[derive(Clone, Default)]
pub struct SignalingService {
    registry: RoomRegistry,
}

impl SignalingService {
    pub fn new(registry: RoomRegistry) -> Self {
        Self { registry }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(RoomRegistry::new(config.eviction, config.room_buffer))
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }
}
