use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use memeboard_sdk::SdkError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Board(#[from] SdkError),

    /// The request could not be decoded into the handler's input.
    #[error("malformed request: {message}")]
    Malformed { status: StatusCode, message: String },

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Board(SdkError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            Self::Malformed { status, .. } => *status,
            Self::Board(SdkError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Board(SdkError::AlreadyVoted { .. }) => StatusCode::CONFLICT,
            Self::Board(SdkError::Identity(_)) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Board(SdkError::Internal(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
