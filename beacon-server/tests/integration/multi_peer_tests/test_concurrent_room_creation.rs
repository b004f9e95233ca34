use beacon_core::RoomId;
use beacon_server::RoomRegistry;
use std::collections::HashSet;

use crate::integration::init_tracing;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_room_creation() {
    init_tracing();

    let registry = RoomRegistry::default();

    let mut tasks = Vec::new();
    for _ in 0..32 {
        let registry = registry.clone();
        tasks.push(tokio::spawn(async move {
            let mut ids = Vec::new();
            for _ in 0..25 {
                let id = registry.create_room();
                assert!(registry.find_room(&id).is_some(), "new room visible at once");
                ids.push(id);
            }
            ids
        }));
    }

    let mut ids: Vec<RoomId> = Vec::new();
    for task in tasks {
        ids.extend(task.await.unwrap());
    }

    let distinct: HashSet<&RoomId> = ids.iter().collect();
    assert_eq!(ids.len(), 32 * 25);
    assert_eq!(distinct.len(), ids.len(), "room ids must never repeat");
    assert_eq!(registry.len(), ids.len());
    for id in &ids {
        let room = registry.find_room(id).expect("created room must be findable");
        assert_eq!(room.id(), id);
    }
}
