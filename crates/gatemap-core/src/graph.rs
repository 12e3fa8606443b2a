//! # Route Graph
//!
//! The immutable invite-route snapshot and its derived node index.
//!
//! All maps are `BTreeMap` for deterministic iteration order: neighbor
//! expansion, suggestion lists and grouped output must not depend on hash
//! ordering. The graph is supplied fully formed by the caller (typically
//! deserialized from a JSON snapshot) and never mutated by the engine.

use crate::RouteEdge;
use crate::UnlockTier;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// ROUTE GRAPH
// =============================================================================

/// Directed, weighted invite-route graph between named communities.
///
/// Node identifiers are the community names as stored: unique,
/// case-sensitive strings. Matching against user input is case-insensitive
/// and lives in [`crate::matcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGraph {
    /// Adjacency: source name -> (target name -> edge).
    #[serde(rename = "routeInfo")]
    pub routes: BTreeMap<String, BTreeMap<String, RouteEdge>>,

    /// Invite-unlock info per community. Display metadata only.
    #[serde(rename = "unlockInviteClass", default)]
    pub unlock_tiers: BTreeMap<String, UnlockTier>,

    /// Explicit short codes per community. Optional per node.
    #[serde(rename = "abbrList", default)]
    pub abbreviations: BTreeMap<String, String>,
}

impl RouteGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outgoing edges of a node in deterministic (name-sorted) order.
    ///
    /// Nodes that only ever appear as targets have no entry in `routes`;
    /// they yield an empty iterator rather than an error.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = (&str, &RouteEdge)> {
        self.routes
            .get(node)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(name, edge)| (name.as_str(), edge)))
    }

    /// Look up a single edge.
    #[must_use]
    pub fn edge(&self, from: &str, to: &str) -> Option<&RouteEdge> {
        self.routes.get(from)?.get(to)
    }

    /// Check whether a directed route exists.
    #[must_use]
    pub fn contains_route(&self, from: &str, to: &str) -> bool {
        self.edge(from, to).is_some()
    }

    /// Nodes with at least one outgoing edge, in sorted order.
    ///
    /// Only these can start a constrained search; a sink can terminate a
    /// path but never begin one.
    pub fn source_nodes(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Total number of distinct nodes (sources and targets).
    #[must_use]
    pub fn node_count(&self) -> usize {
        NodeIndex::build(self).len()
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.routes.values().map(BTreeMap::len).sum()
    }

    /// Short code for a node.
    ///
    /// An explicit abbreviation wins; otherwise the concatenated capital
    /// letters of the name when there are at least two of them; otherwise
    /// the first three characters of the name, upper-cased.
    #[must_use]
    pub fn short_code(&self, node: &str) -> String {
        if let Some(abbr) = self.abbreviations.get(node) {
            return abbr.clone();
        }
        let capitals: String = node.chars().filter(|c| c.is_ascii_uppercase()).collect();
        if capitals.chars().count() >= 2 {
            return capitals;
        }
        node.chars().take(3).collect::<String>().to_uppercase()
    }

    /// Short code usable as an identity in strict matching.
    ///
    /// Explicit abbreviations and capitals-derived codes name the node
    /// unambiguously. The three-character prefix fallback does not: it
    /// collides with every name sharing the same prefix, so it stays a
    /// display aid and is `None` here.
    #[must_use]
    pub fn identity_code(&self, node: &str) -> Option<String> {
        if let Some(abbr) = self.abbreviations.get(node) {
            return Some(abbr.clone());
        }
        let capitals: String = node.chars().filter(|c| c.is_ascii_uppercase()).collect();
        if capitals.chars().count() >= 2 {
            return Some(capitals);
        }
        None
    }
}

// =============================================================================
// NODE INDEX
// =============================================================================

/// Deduplicated, case-sensitively sorted list of every node in the graph.
///
/// Pure derived value: cheap to rebuild whenever the graph snapshot changes.
/// The sorted order is what keeps suggestion lists deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndex {
    nodes: Vec<String>,
}

impl NodeIndex {
    /// Build the index from a graph: every `routes` key plus every target
    /// key in any nested mapping.
    #[must_use]
    pub fn build(graph: &RouteGraph) -> Self {
        let mut set = BTreeSet::new();
        for (source, targets) in &graph.routes {
            set.insert(source.clone());
            for target in targets.keys() {
                set.insert(target.clone());
            }
        }
        Self {
            nodes: set.into_iter().collect(),
        }
    }

    /// All node names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Number of indexed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exact (case-sensitive) membership test.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.binary_search_by(|n| n.as_str().cmp(node)).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
