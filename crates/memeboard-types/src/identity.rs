use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The name reported for callers that presented no credentials.
pub const ANONYMOUS: &str = "anonymous";

/// Identity of the external actor behind a call.
///
/// Memeboard never authenticates principals itself. Whatever sits at the
/// call boundary (an HTTP auth provider, a test harness, an embedding
/// application) resolves the caller and hands the resulting `Principal` to
/// the board. Principals are compared by exact string equality, which is
/// what upvote deduplication relies on.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an already-resolved identity string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The principal used for callers without credentials.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS.into())
    }

    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Principal {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyPrincipal);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
