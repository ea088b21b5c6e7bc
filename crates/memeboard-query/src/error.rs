use memeboard_store::StoreError;

/// Errors produced by range queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type QueryResult<T> = Result<T, QueryError>;
