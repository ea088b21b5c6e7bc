use std::collections::HashSet;

use memeboard_types::{EpochSeconds, PostId, Principal};

/// Set of principals that upvoted a single post.
///
/// The upvote count is the cardinality of the set. The tracker has no
/// removal operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpvoteTracker {
    voters: HashSet<Principal>,
}

impl UpvoteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct principals that upvoted.
    pub fn count(&self) -> usize {
        self.voters.len()
    }

    pub fn has_voted(&self, voter: &Principal) -> bool {
        self.voters.contains(voter)
    }

    /// Iterate over the voters in no particular order.
    pub fn voters(&self) -> impl Iterator<Item = &Principal> {
        self.voters.iter()
    }

    /// Record a vote that the caller has already checked is not a duplicate.
    /// Returns the new count.
    pub(crate) fn insert(&mut self, voter: Principal) -> usize {
        debug_assert!(!self.voters.contains(&voter), "duplicate vote reached insert");
        self.voters.insert(voter);
        self.voters.len()
    }
}

/// A post on the board.
///
/// Everything except the upvote set is fixed at creation. Posts are only
/// constructed by a [`PostStore`](crate::PostStore), which validates the
/// payload and timestamp first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    data: String,
    author: Principal,
    timestamp: EpochSeconds,
    upvotes: UpvoteTracker,
}

impl Post {
    pub(crate) fn new(id: PostId, data: String, author: Principal, timestamp: EpochSeconds) -> Self {
        Self {
            id,
            data,
            author,
            timestamp,
            upvotes: UpvoteTracker::new(),
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn author(&self) -> &Principal {
        &self.author
    }

    pub fn timestamp(&self) -> EpochSeconds {
        self.timestamp
    }

    pub fn upvotes(&self) -> &UpvoteTracker {
        &self.upvotes
    }

    /// Shorthand for `self.upvotes().count()`.
    pub fn upvote_count(&self) -> usize {
        self.upvotes.count()
    }

    pub(crate) fn upvotes_mut(&mut self) -> &mut UpvoteTracker {
        &mut self.upvotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(
            PostId::FIRST,
            "hello".into(),
            Principal::new("alice"),
            EpochSeconds::new(100).unwrap(),
        )
    }

    #[test]
    fn new_post_has_no_upvotes() {
        let p = post();
        assert_eq!(p.upvote_count(), 0);
        assert_eq!(p.upvotes().voters().count(), 0);
    }

    #[test]
    fn tracker_counts_distinct_voters() {
        let mut tracker = UpvoteTracker::new();
        assert_eq!(tracker.insert(Principal::new("a")), 1);
        assert_eq!(tracker.insert(Principal::new("b")), 2);
        assert!(tracker.has_voted(&Principal::new("a")));
        assert!(!tracker.has_voted(&Principal::new("c")));
        assert_eq!(tracker.count(), 2);
    }

    #[test]
    fn accessors_return_creation_values() {
        let p = post();
        assert_eq!(p.id(), PostId::FIRST);
        assert_eq!(p.data(), "hello");
        assert_eq!(p.author(), &Principal::new("alice"));
        assert_eq!(p.timestamp().as_secs(), 100);
    }
}
