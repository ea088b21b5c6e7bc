use memeboard_query::QueryError;
use memeboard_store::StoreError;
use memeboard_types::Principal;
use thiserror::Error;

/// Caller-facing failures of board operations.
///
/// Every variant except `Internal` is a caller fault. None of them leave
/// partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("post not found: {0}")]
    NotFound(String),

    #[error("{voter} already upvoted post {post}")]
    AlreadyVoted { post: String, voter: Principal },

    #[error("identity unavailable: {0}")]
    Identity(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for SdkError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            StoreError::NotFound(id) => Self::NotFound(id.to_string()),
            StoreError::AlreadyVoted { post, voter } => Self::AlreadyVoted {
                post: post.to_string(),
                voter,
            },
            StoreError::LockPoisoned => Self::Internal(err.to_string()),
        }
    }
}

impl From<QueryError> for SdkError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            QueryError::Store(store) => store.into(),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
