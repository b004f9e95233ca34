use crate::error::RelayError;
use crate::room::{Membership, RoomHandle};
use crate::signaling::SignalingService;
use crate::transport::WsConnection;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use beacon_core::{Role, RoomId};
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct JoinParams {
    pub role: Option<String>,
}

/// Join a room over WebSocket.
///
/// Unknown rooms and bad roles fail here, before the upgrade. A host that
/// loses the race for the host slot still gets its handshake and is told
/// on the socket instead.
pub async fn ws_handler(
    Path(room_id): Path<String>,
    Query(params): Query<JoinParams>,
    State(service): State<SignalingService>,
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, RelayError> {
    let room_id = RoomId::from(room_id);
    let room = service
        .registry()
        .find_room(&room_id)
        .ok_or(RelayError::RoomNotFound(room_id))?;
    let role: Role = params.role.as_deref().ok_or(RelayError::MissingRole)?.parse()?;

    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, room, role)))
}

async fn handle_socket(socket: WebSocket, room: RoomHandle, role: Role) {
    info!("New {} connection for room {}", role, room.id());

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let closing = matches!(msg, Message::Close(_));
            if sender.send(msg).await.is_err() || closing {
                break;
            }
        }
    });

    let member = match room.attach(role, Arc::new(WsConnection::new(tx))).await {
        Ok(Some(member)) => member,
        Ok(None) => {
            // Rejected host: let the writer flush the notice and the close frame.
            let _ = send_task.await;
            return;
        }
        Err(e) => {
            warn!("Could not attach {} to room {}: {}", role, room.id(), e);
            send_task.abort();
            return;
        }
    };

    let mut recv_task = tokio::spawn({
        let room = room.clone();
        let member = member.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                let data = match msg {
                    Message::Text(text) => Bytes::from(text),
                    Message::Binary(data) => data,
                    Message::Close(_) => break,
                    _ => continue,
                };
                if let Err(e) = room.deliver(&member, data).await {
                    warn!("Room {} stopped accepting messages: {}", room.id(), e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    log_disconnect(&member, &room);
    if let Err(e) = room.disconnect(member).await {
        debug!("Disconnect not delivered: {}", e);
    }
}

fn log_disconnect(member: &Membership, room: &RoomHandle) {
    match member {
        Membership::Host => info!("Host connection closed for room {}", room.id()),
        Membership::Guest(guest_id) => {
            info!("Guest {} connection closed for room {}", guest_id, room.id())
        }
    }
}
