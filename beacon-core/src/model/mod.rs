mod envelope;
mod guest;
mod notice;
mod role;
mod room;

pub use envelope::{Envelope, GUEST_ID_FIELD};
pub use guest::GuestId;
pub use notice::RelayNotice;
pub use role::Role;
pub use room::RoomId;
