use beacon_server::{EvictionPolicy, Membership};
use bytes::Bytes;

use crate::integration::init_tracing;
use crate::utils::{attach_guest, attach_host, create_test_room, settle};

#[tokio::test]
async fn test_host_to_guest() {
    init_tracing();

    let (_registry, room) = create_test_room(EvictionPolicy::Never);
    let host = attach_host(&room).await;
    let (target_id, target) = attach_guest(&room).await;
    let (_other_id, other) = attach_guest(&room).await;

    // Odd spacing and key order must survive: the frame is forwarded as is.
    let raw = format!(
        r#"{{ "guestId" : "{}",  "foo":2, "sdp":"v=0\r\n" }}"#,
        target_id
    );
    room.deliver(&Membership::Host, Bytes::from(raw.clone()))
        .await
        .unwrap();
    settle(&room).await;

    assert_eq!(target.sent(), vec![raw]);
    assert!(other.events().is_empty());
    assert!(host.events().is_empty(), "nothing is echoed to the host");
}

#[tokio::test]
async fn test_host_to_departed_guest_is_dropped() {
    init_tracing();

    let (_registry, room) = create_test_room(EvictionPolicy::Never);
    let host = attach_host(&room).await;
    let (gone_id, gone) = attach_guest(&room).await;
    let (_stay_id, stay) = attach_guest(&room).await;

    room.disconnect(Membership::Guest(gone_id.clone())).await.unwrap();

    let raw = format!(r#"{{"foo":2,"guestId":"{}"}}"#, gone_id);
    room.deliver(&Membership::Host, Bytes::from(raw)).await.unwrap();
    let snapshot = settle(&room).await;

    assert!(gone.events().is_empty());
    assert!(stay.events().is_empty());
    assert!(host.events().is_empty(), "no error goes back to the host");
    assert!(snapshot.host_attached);
}
