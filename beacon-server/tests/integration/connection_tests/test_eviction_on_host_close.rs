use beacon_server::{EvictionPolicy, Membership, RelayError};

use crate::integration::init_tracing;
use crate::utils::{attach_guest, attach_host, create_test_room};

#[tokio::test]
async fn test_eviction_on_host_close() {
    init_tracing();

    let (registry, room) = create_test_room(EvictionPolicy::OnHostClose);
    let other_room = registry.create_room();
    attach_host(&room).await;
    let (_guest_id, guest) = attach_guest(&room).await;

    room.disconnect(Membership::Host).await.unwrap();

    // The room task stops, so further commands fail.
    let err = room.snapshot().await.expect_err("room should have stopped");
    assert!(matches!(err, RelayError::RoomClosed(ref id) if id == room.id()));

    assert!(guest.is_closed());
    assert!(registry.find_room(room.id()).is_none());
    assert!(registry.find_room(&other_room).is_some(), "other rooms are unaffected");
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn test_room_without_host_is_not_evicted() {
    init_tracing();

    let (registry, room) = create_test_room(EvictionPolicy::OnHostClose);
    let (guest_id, guest) = attach_guest(&room).await;

    // A host close with no host attached changes nothing.
    room.disconnect(Membership::Host).await.unwrap();
    room.disconnect(Membership::Guest(guest_id)).await.unwrap();

    let snapshot = room.snapshot().await.expect("room should still run");
    assert!(snapshot.guests.is_empty());
    assert!(!guest.is_closed());
    assert!(registry.find_room(room.id()).is_some());
}

#[tokio::test]
async fn test_remove_room_unmaps_room() {
    init_tracing();

    let (registry, room) = create_test_room(EvictionPolicy::Never);

    let removed = registry.remove_room(room.id()).expect("room was mapped");
    assert_eq!(removed.id(), room.id());
    assert!(registry.find_room(room.id()).is_none());
    assert!(registry.is_empty());

    // A second removal finds nothing.
    assert!(registry.remove_room(room.id()).is_none());
}
