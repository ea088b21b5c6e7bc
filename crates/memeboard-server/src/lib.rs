//! HTTP server for Memeboard.
//!
//! Serves the board over a small JSON API. Callers are identified by an
//! [`AuthProvider`] from request headers; the board itself trusts whatever
//! principal the provider resolves.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use auth::{AuthProvider, Credentials, HeaderAuth, PRINCIPAL_HEADER};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::MemeboardServer;
pub use state::AppState;
