use memeboard_query::{render, render_post, QueryEngine, RangeQuery};
use memeboard_store::{InMemoryPostStore, PostStore, StoreError};
use memeboard_types::{PostId, SortKey};

use crate::error::{SdkError, SdkResult};
use crate::identity::IdentitySource;

/// High-level Memeboard API.
///
/// Owns the post store for the lifetime of the board. Inputs are taken in
/// their wire form (string IDs, raw integers, sort names) and outputs are
/// ID strings or rendered JSON text.
pub struct Memeboard<S: PostStore = InMemoryPostStore> {
    store: S,
}

impl Memeboard {
    /// A board backed by a fresh in-memory store.
    pub fn new() -> Self {
        Self::with_store(InMemoryPostStore::new())
    }
}

impl Default for Memeboard {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PostStore> Memeboard<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- Mutations ----

    /// Create a post authored by the caller and return its ID.
    pub fn post_meme<I: IdentitySource + ?Sized>(
        &self,
        data: &str,
        timestamp: i64,
        caller: &I,
    ) -> SdkResult<String> {
        let author = caller.principal()?;
        let id = self.store.create(data, timestamp, &author)?;
        Ok(id.to_string())
    }

    /// Upvote a post as the caller. Returns `true` on success.
    ///
    /// An ID that is not a decimal number cannot name any post and is
    /// reported as `NotFound`. Errors echo `id` exactly as given.
    pub fn upvote<I: IdentitySource + ?Sized>(&self, id: &str, caller: &I) -> SdkResult<bool> {
        let voter = caller.principal()?;
        let parsed = parse_id(id)?;
        self.store.upvote(parsed, &voter).map_err(|err| match err {
            StoreError::NotFound(_) => SdkError::NotFound(id.to_string()),
            StoreError::AlreadyVoted { voter, .. } => SdkError::AlreadyVoted {
                post: id.to_string(),
                voter,
            },
            other => other.into(),
        })?;
        Ok(true)
    }

    // ---- Queries ----

    /// Range query with the sort order given by name, rendered as JSON.
    pub fn get_posts_in_range(
        &self,
        start: i64,
        end: i64,
        page: i64,
        page_size: i64,
        sort_by: &str,
    ) -> SdkResult<String> {
        self.query(&RangeQuery::new(
            start,
            end,
            page,
            page_size,
            SortKey::from_name(sort_by),
        ))
    }

    pub fn query(&self, query: &RangeQuery) -> SdkResult<String> {
        let posts = QueryEngine::new(&self.store).query_range(query)?;
        Ok(render(&posts))
    }

    /// A single post rendered as a JSON object.
    pub fn get_post(&self, id: &str) -> SdkResult<String> {
        let parsed = parse_id(id)?;
        let post = self
            .store
            .find_by_id(parsed)?
            .ok_or_else(|| SdkError::NotFound(id.to_string()))?;
        Ok(render_post(&post))
    }

    pub fn post_count(&self) -> SdkResult<usize> {
        Ok(self.store.len()?)
    }
}

fn parse_id(id: &str) -> SdkResult<PostId> {
    id.parse::<PostId>()
        .map_err(|_| SdkError::NotFound(id.to_string()))
}
