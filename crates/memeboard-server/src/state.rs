use std::sync::Arc;

use axum::http::HeaderMap;
use memeboard_sdk::Memeboard;
use memeboard_types::Principal;

use crate::auth::{AuthProvider, Credentials, HeaderAuth};
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<Memeboard>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(board: Arc<Memeboard>, auth: Arc<dyn AuthProvider>, config: ServerConfig) -> Self {
        Self {
            board,
            auth,
            config: Arc::new(config),
        }
    }

    /// A fresh board with header-based auth.
    pub fn from_config(config: ServerConfig) -> Self {
        Self::new(Arc::new(Memeboard::new()), Arc::new(HeaderAuth), config)
    }

    /// Resolve the principal for a mutating request.
    pub async fn writer(&self, headers: &HeaderMap) -> ServerResult<Principal> {
        let principal = self
            .auth
            .authenticate(&Credentials::from_headers(headers))
            .await?;
        if principal.is_anonymous() && !self.config.allow_anonymous_writes {
            return Err(ServerError::Unauthorized(
                "anonymous callers may not create or upvote posts".into(),
            ));
        }
        Ok(principal)
    }
}
