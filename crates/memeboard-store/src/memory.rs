use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use memeboard_types::{EpochSeconds, PostId, Principal};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::post::Post;
use crate::traits::PostStore;

/// In-memory, `Vec`-backed post store.
///
/// Holds posts for the lifetime of the process. One `RwLock` guards both the
/// post sequence and the ID counter, so allocation + append and
/// duplicate-check + insert are each performed under a single write lock.
pub struct InMemoryPostStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    posts: Vec<Post>,
    next_id: PostId,
}

impl StoreState {
    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id() == id)
    }
}

impl InMemoryPostStore {
    /// Create an empty store whose first post will get [`PostId::FIRST`].
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// The ID the next successful `create` will return.
    pub fn next_id(&self) -> StoreResult<PostId> {
        Ok(self.read()?.next_id)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn create(&self, data: &str, timestamp: i64, author: &Principal) -> StoreResult<PostId> {
        if data.is_empty() {
            return Err(StoreError::InvalidArgument("post data must not be empty".into()));
        }
        let timestamp = EpochSeconds::new(timestamp)?;

        let mut state = self.write()?;
        let id = state.next_id;
        state
            .posts
            .push(Post::new(id, data.to_string(), author.clone(), timestamp));
        state.next_id = id.next();

        debug!(id = %id, author = %author, timestamp = %timestamp, "post created");
        Ok(id)
    }

    fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>> {
        let state = self.read()?;
        Ok(state.posts.iter().find(|post| post.id() == id).cloned())
    }

    fn upvote(&self, id: PostId, voter: &Principal) -> StoreResult<usize> {
        let mut state = self.write()?;
        let index = state.position(id).ok_or(StoreError::NotFound(id))?;
        let upvotes = state.posts[index].upvotes_mut();

        if upvotes.has_voted(voter) {
            return Err(StoreError::AlreadyVoted {
                post: id,
                voter: voter.clone(),
            });
        }

        let count = upvotes.insert(voter.clone());
        debug!(id = %id, voter = %voter, count, "upvote recorded");
        Ok(count)
    }

    fn snapshot(&self) -> StoreResult<Vec<Post>> {
        Ok(self.read()?.posts.clone())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.posts.len())
    }
}

impl std::fmt::Debug for InMemoryPostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len().unwrap_or_default();
        f.debug_struct("InMemoryPostStore")
            .field("post_count", &count)
            .finish()
    }
}
