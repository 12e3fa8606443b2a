//! # Search Engine Facade
//!
//! One engine per graph snapshot: borrows the graph, owns the derived node
//! index, and exposes the query surface the app layer consumes. Queries
//! share nothing but the immutable snapshot, so concurrent callers are safe
//! by construction.

use crate::graph::{NodeIndex, RouteGraph};
use crate::query::RouteQuery;
use crate::search::{self, RoutePath};
use crate::{matcher, UnlockTier};

/// Query facade over one immutable route graph.
#[derive(Debug)]
pub struct SearchEngine<'g> {
    graph: &'g RouteGraph,
    index: NodeIndex,
}

impl<'g> SearchEngine<'g> {
    /// Build the engine (and its node index) for a graph snapshot.
    #[must_use]
    pub fn new(graph: &'g RouteGraph) -> Self {
        Self {
            graph,
            index: NodeIndex::build(graph),
        }
    }

    /// The underlying graph snapshot.
    #[must_use]
    pub fn graph(&self) -> &RouteGraph {
        self.graph
    }

    /// All known node names in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.index.iter()
    }

    /// Display short code for a node.
    #[must_use]
    pub fn short_code(&self, node: &str) -> String {
        self.graph.short_code(node)
    }

    /// Unlock tier metadata for a node, when published.
    #[must_use]
    pub fn unlock_tier(&self, node: &str) -> Option<&UnlockTier> {
        self.graph.unlock_tiers.get(node)
    }

    /// Run a constrained search and return ranked paths.
    #[must_use]
    pub fn find_routes(&self, query: &RouteQuery) -> Vec<RoutePath> {
        search::find_routes(self.graph, &self.index, query)
    }

    /// Completion candidates for a partially typed query.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<String> {
        matcher::suggestions(query, self.graph, &self.index)
    }

    /// Hop-minimal path between two exactly named nodes.
    #[must_use]
    pub fn shortest_route(&self, start: &str, end: &str) -> Option<Vec<String>> {
        search::shortest_route(self.graph, start, end)
    }
}

// =============================================================================
// TESTS
// =============================================================================
