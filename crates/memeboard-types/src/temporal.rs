use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A point in time as whole seconds since the UNIX epoch.
///
/// Post timestamps are supplied by the caller and must be strictly positive;
/// the constructor is the only place that rule is checked. Range bounds used
/// by queries are plain `i64` values and are not required to be positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct EpochSeconds(i64);

impl EpochSeconds {
    /// Validate a caller-supplied timestamp.
    pub fn new(seconds: i64) -> Result<Self, TypeError> {
        if seconds <= 0 {
            return Err(TypeError::NonPositiveTimestamp(seconds));
        }
        Ok(Self(seconds))
    }

    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns `true` if `start <= self <= end`.
    pub fn within(&self, start: i64, end: i64) -> bool {
        self.0 >= start && self.0 <= end
    }
}

impl TryFrom<i64> for EpochSeconds {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EpochSeconds> for i64 {
    fn from(value: EpochSeconds) -> Self {
        value.0
    }
}

impl fmt::Debug for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EpochSeconds({})", self.0)
    }
}

impl fmt::Display for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(EpochSeconds::new(0), Err(TypeError::NonPositiveTimestamp(0)));
        assert_eq!(EpochSeconds::new(-5), Err(TypeError::NonPositiveTimestamp(-5)));
        assert_eq!(EpochSeconds::new(1).unwrap().as_secs(), 1);
    }

    #[test]
    fn within_is_inclusive() {
        let t = EpochSeconds::new(200).unwrap();
        assert!(t.within(200, 200));
        assert!(t.within(150, 300));
        assert!(!t.within(201, 300));
        assert!(!t.within(100, 199));
    }

    #[test]
    fn inverted_bounds_match_nothing() {
        let t = EpochSeconds::new(200).unwrap();
        assert!(!t.within(300, 100));
    }

    #[test]
    fn deserialization_validates() {
        let ok: EpochSeconds = serde_json::from_str("1700000000").unwrap();
        assert_eq!(ok.as_secs(), 1_700_000_000);
        assert!(serde_json::from_str::<EpochSeconds>("0").is_err());
    }

    #[test]
    fn display_is_decimal_seconds() {
        assert_eq!(EpochSeconds::new(300).unwrap().to_string(), "300");
    }
}
