use beacon_core::RoomId;
use beacon_server::RoomRegistry;
use std::collections::HashSet;

use crate::integration::init_tracing;

#[tokio::test]
async fn test_room_ids_unique() {
    init_tracing();

    let registry = RoomRegistry::default();
    let ids: Vec<RoomId> = (0..200).map(|_| registry.create_room()).collect();

    let distinct: HashSet<&RoomId> = ids.iter().collect();
    assert_eq!(distinct.len(), ids.len(), "room ids must never repeat");
    assert_eq!(registry.len(), 200);

    for id in &ids {
        let room = registry.find_room(id).expect("created room must be findable");
        assert_eq!(room.id(), id);
    }
}

#[tokio::test]
async fn test_unknown_room_not_found() {
    init_tracing();

    let registry = RoomRegistry::default();
    registry.create_room();

    assert!(registry.find_room(&RoomId::from("no-such-room")).is_none());
}
