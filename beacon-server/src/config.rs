use clap::{Args, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// What happens to a room once its host has gone and the guests were evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EvictionPolicy {
    /// Keep the room mapped; a new host may attach later.
    #[default]
    Never,
    /// Drop the room from the registry and stop its task.
    OnHostClose,
}

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "BEACON_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(short, long, env = "BEACON_PORT", default_value_t = 3536)]
    pub port: u16,

    #[arg(long, env = "BEACON_EVICTION", value_enum, default_value_t = EvictionPolicy::Never)]
    pub eviction: EvictionPolicy,

    /// Capacity of each room's command queue.
    #[arg(long, env = "BEACON_ROOM_BUFFER", default_value_t = 256)]
    pub room_buffer: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3536,
            eviction: EvictionPolicy::Never,
            room_buffer: 256,
        }
    }
}
