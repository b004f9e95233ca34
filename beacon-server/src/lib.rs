//! Host/guest signaling relay.
//!
//! One host and any number of guests join a room over WebSocket and swap
//! opaque negotiation messages through it. Each room is a tokio task that
//! owns the room state; connections talk to it through a [`RoomHandle`].

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod room;
pub mod signaling;
pub mod transport;

pub use config::{EvictionPolicy, ServerConfig};
pub use error::RelayError;
pub use room::*;
pub use signaling::*;
pub use transport::*;
