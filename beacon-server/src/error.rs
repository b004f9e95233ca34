use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use beacon_core::{RoleParseError, RoomId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("room `{0}` not found")]
    RoomNotFound(RoomId),

    #[error("missing `role` query parameter")]
    MissingRole,

    #[error(transparent)]
    InvalidRole(#[from] RoleParseError),

    /// The room task has stopped, normally because it was evicted.
    #[error("room `{0}` is no longer running")]
    RoomClosed(RoomId),

    #[error("connection closed")]
    ConnectionClosed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            RelayError::MissingRole | RelayError::InvalidRole(_) => StatusCode::BAD_REQUEST,
            RelayError::RoomClosed(_) | RelayError::ConnectionClosed => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            RelayError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
