use beacon_server::EvictionPolicy;

use crate::integration::init_tracing;
use crate::utils::{attach_host, create_test_room, settle};

#[tokio::test]
async fn test_host_attaches() {
    init_tracing();

    let (_registry, room) = create_test_room(EvictionPolicy::Never);

    let empty = settle(&room).await;
    assert!(!empty.host_attached, "new rooms start without a host");
    assert!(empty.guests.is_empty());
    assert_eq!(&empty.id, room.id());

    let host = attach_host(&room).await;

    let active = settle(&room).await;
    assert!(active.host_attached);
    assert!(host.events().is_empty(), "a successful attach sends nothing");
}
