//! # Query Parameters
//!
//! The pure parameter tuple of a constrained route search. Suitable as a
//! memoization key by outer layers: the engine itself never holds query
//! state between calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::primitives::DEFAULT_MAX_HOPS;

// =============================================================================
// SORT KEY
// =============================================================================

/// Ranking key for enumerated routes.
///
/// Wire names match the original query-string values (`jumps` / `days`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending by hop count.
    #[default]
    #[serde(rename = "jumps")]
    Hops,
    /// Ascending by cumulative waiting time.
    Days,
}

/// Error for an unrecognized sort key string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}`, expected `jumps` or `days`")]
pub struct SortKeyParseError(pub String);

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jumps" | "hops" => Ok(Self::Hops),
            "days" => Ok(Self::Days),
            other => Err(SortKeyParseError(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hops => f.write_str("jumps"),
            Self::Days => f.write_str("days"),
        }
    }
}

// =============================================================================
// ROUTE QUERY
// =============================================================================

/// One constrained route search, fully described by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    /// Free-text source query. May be comma-separated; empty means
    /// "any node with outgoing routes" when `target` is non-empty.
    pub source: String,

    /// Free-text target query. Empty means "every reachable node".
    pub target: String,

    /// Hop ceiling. Honored as given; interactive frontends should impose
    /// their own limit before building a query.
    pub max_hops: u32,

    /// Cumulative waiting-time ceiling in days. `None` means unbounded.
    pub max_days: Option<u64>,

    /// Result ordering.
    pub sort: SortKey,
}

impl Default for RouteQuery {
    fn default() -> Self {
        Self {
            source: String::new(),
            target: String::new(),
            max_hops: DEFAULT_MAX_HOPS,
            max_days: None,
            sort: SortKey::default(),
        }
    }
}

impl RouteQuery {
    /// Query with both endpoints and the defaults for everything else.
    #[must_use]
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    /// Set the hop ceiling.
    #[must_use]
    pub fn with_max_hops(mut self, max_hops: u32) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Set the waiting-time ceiling.
    #[must_use]
    pub fn with_max_days(mut self, max_days: u64) -> Self {
        self.max_days = Some(max_days);
        self
    }

    /// Set the sort key.
    #[must_use]
    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when neither endpoint is constrained; such a query has an
    /// empty result by definition.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty() && self.target.trim().is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_round_trips() {
        assert_eq!("jumps".parse::<SortKey>(), Ok(SortKey::Hops));
        assert_eq!("DAYS".parse::<SortKey>(), Ok(SortKey::Days));
        assert_eq!(SortKey::Hops.to_string(), "jumps");
        assert_eq!(SortKey::Days.to_string(), "days");
    }

    #[test]
    fn sort_key_rejects_unknown() {
        let err = "weight".parse::<SortKey>();
        assert_eq!(err, Err(SortKeyParseError("weight".to_string())));
    }

    #[test]
    fn defaults_match_interactive_defaults() {
        let query = RouteQuery::default();
        assert_eq!(query.max_hops, 1);
        assert_eq!(query.max_days, None);
        assert_eq!(query.sort, SortKey::Hops);
        assert!(query.is_blank());
    }

    #[test]
    fn builder_composes() {
        let query = RouteQuery::between("A", "C")
            .with_max_hops(3)
            .with_max_days(90)
            .sorted_by(SortKey::Days);
        assert_eq!(query.max_hops, 3);
        assert_eq!(query.max_days, Some(90));
        assert!(!query.is_blank());
    }
}
