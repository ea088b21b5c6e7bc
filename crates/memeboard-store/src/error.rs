use memeboard_types::{PostId, Principal, TypeError};

/// Errors from post store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Malformed input: empty payload or non-positive timestamp.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced post does not exist.
    #[error("post not found: {0}")]
    NotFound(PostId),

    /// The principal already upvoted this post.
    #[error("{voter} already upvoted post {post}")]
    AlreadyVoted { post: PostId, voter: Principal },

    /// A writer panicked while holding the store lock.
    #[error("post store lock poisoned")]
    LockPoisoned,
}

impl From<TypeError> for StoreError {
    fn from(err: TypeError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
