use beacon_server::{EvictionPolicy, Membership};
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{attach_guest, attach_host, create_test_room, json_bytes, settle};

#[tokio::test]
async fn test_host_reattach_after_close() {
    init_tracing();

    let (registry, room) = create_test_room(EvictionPolicy::Never);
    let old_host = attach_host(&room).await;
    let (_old_guest_id, old_guest) = attach_guest(&room).await;

    room.disconnect(Membership::Host).await.unwrap();
    let empty = settle(&room).await;
    assert!(!empty.host_attached && empty.guests.is_empty());
    assert!(old_guest.is_closed());

    // Same room id, new session.
    let found = registry.find_room(room.id()).expect("room kept after host left");
    let new_host = attach_host(&found).await;
    let (guest_id, _guest) = attach_guest(&found).await;

    found
        .deliver(&Membership::Guest(guest_id.clone()), json_bytes(&json!({ "offer": 2 })))
        .await
        .unwrap();
    settle(&found).await;

    assert!(old_host.events().is_empty());
    assert_eq!(
        new_host.sent_json(),
        vec![json!({ "offer": 2, "guestId": guest_id.as_str() })]
    );
}
