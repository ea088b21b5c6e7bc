use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering applied to the posts matched by a range query.
///
/// Both orders are descending. Parsing is lenient: any name other than
/// `"UPVOTES"` selects [`SortKey::DateCreated`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Most upvoted first.
    Upvotes,
    /// Newest timestamp first.
    #[default]
    DateCreated,
}

impl SortKey {
    pub fn from_name(name: &str) -> Self {
        match name {
            "UPVOTES" => Self::Upvotes,
            _ => Self::DateCreated,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upvotes => "UPVOTES",
            Self::DateCreated => "DATE_CREATED",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
