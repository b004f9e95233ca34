use crate::error::RelayError;
use crate::transport::Connection;
use axum::extract::ws::Message;
use tokio::sync::mpsc;

/// [`Connection`] backed by the outbox of an axum WebSocket writer task.
#[derive(Debug, Clone)]
pub struct WsConnection {
    outbox: mpsc::UnboundedSender<Message>,
}

impl WsConnection {
    pub fn new(outbox: mpsc::UnboundedSender<Message>) -> Self {
        Self { outbox }
    }
}

impl Connection for WsConnection {
    fn send(&self, text: String) -> Result<(), RelayError> {
        self.outbox
            .send(Message::Text(text.into()))
            .map_err(|_| RelayError::ConnectionClosed)
    }

    fn close(&self) {
        // The writer stops after forwarding the close frame.
        let _ = self.outbox.send(Message::Close(None));
    }
}
