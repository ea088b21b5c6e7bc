use memeboard_store::{Post, PostStore};
use memeboard_types::SortKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QueryResult;
use crate::page::PageRequest;

/// Raw parameters of a range query, exactly as a caller supplies them.
///
/// `start` and `end` are inclusive epoch-second bounds; no ordering between
/// them is enforced. `page` and `page_size` are validated by
/// [`QueryEngine::query_range`] unless the store is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub start: i64,
    pub end: i64,
    pub page: i64,
    pub page_size: i64,
    #[serde(default)]
    pub sort_by: SortKey,
}

impl RangeQuery {
    pub fn new(start: i64, end: i64, page: i64, page_size: i64, sort_by: SortKey) -> Self {
        Self {
            start,
            end,
            page,
            page_size,
            sort_by,
        }
    }
}

/// Runs range queries against a [`PostStore`].
pub struct QueryEngine<'a, S: PostStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PostStore + ?Sized> QueryEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Filter, sort, then paginate.
    ///
    /// An empty store yields an empty page without looking at `page` or
    /// `page_size`. Otherwise invalid paging fails with `InvalidArgument`
    /// before any filtering happens. A page past the end is empty, not an
    /// error.
    pub fn query_range(&self, query: &RangeQuery) -> QueryResult<Vec<Post>> {
        let posts = self.store.snapshot()?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }
        let page = PageRequest::new(query.page, query.page_size)?;

        let mut matched = filter_range(posts, query.start, query.end);
        sort_posts(&mut matched, query.sort_by);
        let matched_len = matched.len();
        let result = paginate(matched, &page);

        debug!(
            start = query.start,
            end = query.end,
            sort_by = %query.sort_by,
            page = page.page(),
            matched = matched_len,
            returned = result.len(),
            "range query"
        );
        Ok(result)
    }
}

/// Keep posts with `start <= timestamp <= end`, preserving input order.
pub fn filter_range(posts: Vec<Post>, start: i64, end: i64) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| post.timestamp().within(start, end))
        .collect()
}

/// Sort in place, descending by the chosen key.
///
/// The sort is stable: posts that compare equal keep their input order,
/// which for store snapshots is creation order.
pub fn sort_posts(posts: &mut [Post], key: SortKey) {
    match key {
        SortKey::Upvotes => posts.sort_by(|a, b| b.upvote_count().cmp(&a.upvote_count())),
        SortKey::DateCreated => posts.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
    }
}

/// Cut the requested page out of an already sorted sequence.
pub fn paginate(mut posts: Vec<Post>, page: &PageRequest) -> Vec<Post> {
    match page.bounds(posts.len()) {
        Some((start, end)) => {
            posts.truncate(end);
            posts.drain(..start);
            posts
        }
        None => Vec::new(),
    }
}
