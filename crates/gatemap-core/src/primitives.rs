//! # Primitives
//!
//! Core value types shared across the engine.
//!
//! Field names follow the wire format of the published route snapshot
//! (`routeInfo` / `unlockInviteClass` / `abbrList`), so a snapshot file can
//! be deserialized directly into these types. The engine itself never
//! interprets the textual metadata; it only routes on `days`.

use serde::{Deserialize, Serialize};

// =============================================================================
// BOUNDS
// =============================================================================

/// Default hop ceiling for constrained searches.
///
/// Path enumeration is exponential in the hop bound on dense graphs. The
/// engine honors whatever bound the caller supplies; keeping it small is
/// the caller's responsibility.
pub const DEFAULT_MAX_HOPS: u32 = 1;

// =============================================================================
// ROUTE EDGE
// =============================================================================

/// A directed invite route between two communities.
///
/// `days` is the waiting cost of taking this route; the remaining fields are
/// display metadata carried through to results untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    /// Waiting time in days. Always the routing cost, never negative.
    pub days: u64,

    /// Free-text requirements for the route (may contain URLs).
    #[serde(rename = "reqs")]
    pub requirements: String,

    /// Recruitment status label ("yes", "no", "open", ...).
    #[serde(rename = "active")]
    pub status: String,

    /// Label for when this route was last verified.
    #[serde(rename = "updated")]
    pub last_checked: String,
}

impl RouteEdge {
    /// Create an edge with the given day cost and empty metadata.
    #[must_use]
    pub fn with_days(days: u64) -> Self {
        Self {
            days,
            requirements: String::new(),
            status: String::new(),
            last_checked: String::new(),
        }
    }
}

// =============================================================================
// UNLOCK TIER
// =============================================================================

/// Invite-unlock information for a community: `(days until unlock, tier label)`.
///
/// Serialized as a 2-element array in the wire format. Informational only;
/// the search engine never routes on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockTier(pub u64, pub String);

impl UnlockTier {
    /// Days of membership required before invites unlock.
    #[must_use]
    pub fn days(&self) -> u64 {
        self.0
    }

    /// Human-readable tier label.
    #[must_use]
    pub fn tier(&self) -> &str {
        &self.1
    }
}

// =============================================================================
// TESTS
// =============================================================================
