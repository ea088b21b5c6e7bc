use memeboard_types::{PostId, Principal};

use crate::error::StoreResult;
use crate::post::Post;

/// Append-only post store.
///
/// All implementations must satisfy these invariants:
/// - `create` validates before allocating, so a failed call neither consumes
///   an ID nor appends anything.
/// - IDs are strictly increasing in creation order and never reused.
/// - `upvote` checks for a duplicate before inserting; the check and the
///   insert are one atomic step with respect to other callers.
/// - Reads return clones. Callers can never mutate a stored post directly.
pub trait PostStore: Send + Sync {
    /// Append a new post and return its ID.
    ///
    /// Fails with `InvalidArgument` if `data` is empty or `timestamp <= 0`.
    fn create(&self, data: &str, timestamp: i64, author: &Principal) -> StoreResult<PostId>;

    /// Look up a post by exact ID.
    ///
    /// Returns `Ok(None)` if no post has this ID.
    fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>>;

    /// Record an upvote from `voter` and return the new upvote count.
    ///
    /// Fails with `NotFound` for an unknown ID and `AlreadyVoted` if `voter`
    /// already upvoted this post.
    fn upvote(&self, id: PostId, voter: &Principal) -> StoreResult<usize>;

    /// Every post, in creation order.
    fn snapshot(&self) -> StoreResult<Vec<Post>>;

    /// Number of posts stored.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Upvote count of a single post.
    ///
    /// Default implementation goes through `find_by_id`.
    fn upvote_count(&self, id: PostId) -> StoreResult<usize> {
        self.find_by_id(id)?
            .map(|post| post.upvote_count())
            .ok_or(crate::StoreError::NotFound(id))
    }
}
