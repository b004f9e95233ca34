//! Wire model shared by the beacon relay and its peers.
//!
//! Rooms and guests are addressed by opaque text ids. Peers exchange
//! [`Envelope`]s: arbitrary JSON objects with one reserved routing field,
//! `guestId`, which the relay reads (host side) or stamps (guest side).

#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::{EnvelopeError, RoleParseError};
pub use model::{Envelope, GUEST_ID_FIELD, GuestId, RelayNotice, Role, RoomId};
