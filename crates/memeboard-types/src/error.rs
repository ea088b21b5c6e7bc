use thiserror::Error;

/// Errors produced when constructing or parsing foundation types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid post id: {0:?}")]
    InvalidPostId(String),

    #[error("timestamp must be a positive number of seconds, got {0}")]
    NonPositiveTimestamp(i64),

    #[error("principal must not be empty")]
    EmptyPrincipal,
}
