use beacon_server::{AttachOutcome, EvictionPolicy};

use crate::integration::init_tracing;
use crate::utils::{MockConnection, create_test_room, settle};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_host_attach() {
    init_tracing();

    let (_registry, room) = create_test_room(EvictionPolicy::Never);

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let room = room.clone();
        tasks.push(tokio::spawn(async move {
            let conn = MockConnection::stored_only();
            let outcome = room.attach_host(conn.as_connection()).await.unwrap();
            (outcome, conn)
        }));
    }

    let mut attached = Vec::new();
    let mut rejected = Vec::new();
    for task in tasks {
        let (outcome, conn) = task.await.unwrap();
        match outcome {
            AttachOutcome::Attached => attached.push(conn),
            AttachOutcome::Rejected => rejected.push(conn),
        }
    }

    assert_eq!(attached.len(), 1, "exactly one host wins the slot");
    assert_eq!(rejected.len(), 15);
    assert!(!attached[0].is_closed());
    assert!(rejected.iter().all(|conn| conn.is_closed() && conn.sent().len() == 1));
    assert!(settle(&room).await.host_attached);
}
