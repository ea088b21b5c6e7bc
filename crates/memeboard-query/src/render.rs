//! JSON text rendering of posts.
//!
//! The output format is fixed: an array of objects with the fields `id`,
//! `data`, `author`, `timestamp`, `upvotes` in that order and no whitespace.
//! `id` and `timestamp` are JSON strings, `upvotes` is a JSON integer. In
//! `data` and `author` only the double quote is escaped; backslashes and
//! control characters pass through unchanged.

use std::borrow::Cow;
use std::fmt::Write;

use memeboard_store::Post;

/// Render posts as a JSON array, preserving their order.
pub fn render(posts: &[Post]) -> String {
    let mut out = String::with_capacity(2 + posts.len() * 96);
    out.push('[');
    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_post(&mut out, post);
    }
    out.push(']');
    out
}

/// Render a single post as a JSON object.
pub fn render_post(post: &Post) -> String {
    let mut out = String::with_capacity(96);
    write_post(&mut out, post);
    out
}

fn write_post(out: &mut String, post: &Post) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"{{"id":"{}","data":"{}","author":"{}","timestamp":"{}","upvotes":{}}}"#,
        post.id(),
        escape_quotes(post.data()),
        escape_quotes(post.author().as_str()),
        post.timestamp().as_secs(),
        post.upvote_count(),
    );
}

fn escape_quotes(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(s.replace('"', "\\\""))
    } else {
        Cow::Borrowed(s)
    }
}
