//! Scripted board sessions.
//!
//! A script is a JSON array of steps executed in order against one board:
//!
//! ```json
//! [
//!   { "op": "create", "as": "alice", "data": "hello", "timestamp": 100 },
//!   { "op": "upvote", "as": "bob", "id": "1" },
//!   { "op": "query", "start": 0, "end": 1000, "page": 1, "page_size": 10, "sort_by": "UPVOTES" },
//!   { "op": "get", "id": "1" }
//! ]
//! ```
//!
//! `as` defaults to the anonymous principal.

use anyhow::Context;
use memeboard_sdk::{Memeboard, Principal, RangeQuery, SdkResult};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Create {
        #[serde(rename = "as", default = "Principal::anonymous")]
        caller: Principal,
        data: String,
        timestamp: i64,
    },
    Upvote {
        #[serde(rename = "as", default = "Principal::anonymous")]
        caller: Principal,
        id: String,
    },
    Query(RangeQuery),
    Get {
        id: String,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Upvote { .. } => "upvote",
            Self::Query(_) => "query",
            Self::Get { .. } => "get",
        }
    }
}

/// The result of one executed step.
#[derive(Debug)]
pub struct StepOutcome {
    pub index: usize,
    pub op: &'static str,
    pub result: SdkResult<String>,
}

pub fn parse_script(text: &str) -> anyhow::Result<Vec<Step>> {
    serde_json::from_str(text).context("script must be a JSON array of steps")
}

/// Run every step; a failing step is recorded and the script continues.
pub fn execute(board: &Memeboard, steps: &[Step]) -> Vec<StepOutcome> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let result = match step {
                Step::Create {
                    caller,
                    data,
                    timestamp,
                } => board.post_meme(data, *timestamp, caller),
                Step::Upvote { caller, id } => board.upvote(id, caller).map(|ok| ok.to_string()),
                Step::Query(query) => board.query(query),
                Step::Get { id } => board.get_post(id),
            };
            tracing::debug!(index, op = step.name(), ok = result.is_ok(), "script step");
            StepOutcome {
                index,
                op: step.name(),
                result,
            }
        })
        .collect()
}
