use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use memeboard_types::Principal;

use crate::error::{ServerError, ServerResult};

/// Header carrying a principal name asserted by a trusted front proxy.
pub const PRINCIPAL_HEADER: &str = "x-principal";

/// What a request presented to identify its caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Bearer(String),
    Principal(String),
    Anonymous,
}

impl Credentials {
    /// Extract credentials from request headers.
    ///
    /// A bearer token wins over the principal header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if let Some(token) = bearer {
            return Self::Bearer(token.trim().to_string());
        }
        match headers.get(PRINCIPAL_HEADER).and_then(|v| v.to_str().ok()) {
            Some(name) => Self::Principal(name.to_string()),
            None => Self::Anonymous,
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Principal>;
}

/// Trusts the presented credentials as-is: the bearer token or header value
/// becomes the principal name.
pub struct HeaderAuth;

#[async_trait]
impl AuthProvider for HeaderAuth {
    async fn authenticate(&self, credentials: &Credentials) -> ServerResult<Principal> {
        match credentials {
            Credentials::Bearer(token) | Credentials::Principal(token) => token
                .parse()
                .map_err(|e| ServerError::Unauthorized(format!("{e}"))),
            Credentials::Anonymous => Ok(Principal::anonymous()),
        }
    }
}
