//! Range queries over Memeboard posts.
//!
//! A query runs three stages in a fixed order:
//!
//! 1. **Filter** -- keep posts whose timestamp lies in `[start, end]`
//! 2. **Sort** -- stable descending sort by upvotes or by timestamp
//! 3. **Paginate** -- cut out page `page` of size `page_size`
//!
//! Results are rendered to JSON text by [`render`].

pub mod engine;
pub mod error;
pub mod page;
pub mod render;

pub use engine::{filter_range, paginate, sort_posts, QueryEngine, RangeQuery};
pub use error::{QueryError, QueryResult};
pub use page::{PageRequest, MAX_PAGE_SIZE};
pub use render::{render, render_post};
