//! # Constrained Route Search
//!
//! Breadth-first enumeration of all qualifying invite paths, the result
//! ranker, and the unconstrained hop-minimal path finder.
//!
//! The enumerator works level-order over a FIFO queue of partial paths.
//! Strict FIFO order matters twice: discovered paths come out in
//! non-decreasing hop order (so hop-ranking is stable for free), and the
//! result set grows monotonically with the hop ceiling.

use crate::graph::{NodeIndex, RouteGraph};
use crate::matcher::{self, MatchMode};
use crate::query::{RouteQuery, SortKey};
use crate::RouteEdge;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// =============================================================================
// ROUTE PATH
// =============================================================================

/// One enumerated invite path. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoutePath {
    /// The resolved start node.
    pub source: String,

    /// The end node of this specific path. Differs per path when the
    /// source or target query matched several nodes.
    pub terminal: String,

    /// Node names from source to terminal, length = hops + 1.
    pub nodes: Vec<String>,

    /// Sum of traversed edge day costs.
    pub total_days: u64,

    /// Traversed edges, parallel to consecutive pairs in `nodes`.
    pub edges: Vec<RouteEdge>,
}

impl RoutePath {
    fn seed(start: &str) -> Self {
        Self {
            source: start.to_string(),
            terminal: start.to_string(),
            nodes: vec![start.to_string()],
            total_days: 0,
            edges: Vec::new(),
        }
    }

    fn extend(&self, neighbor: &str, edge: &RouteEdge) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.push(neighbor.to_string());
        let mut edges = self.edges.clone();
        edges.push(edge.clone());
        Self {
            source: self.source.clone(),
            terminal: neighbor.to_string(),
            nodes,
            total_days: self.total_days.saturating_add(edge.days),
            edges,
        }
    }

    /// Number of traversed edges.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    fn visits(&self, node: &str) -> bool {
        self.nodes.iter().any(|n| n == node)
    }
}

// =============================================================================
// CONSTRAINED ENUMERATION
// =============================================================================

/// Enumerate every qualifying path for `query`, ranked by its sort key.
///
/// Total over all inputs: unresolvable terms, empty graphs and blank
/// queries produce an empty list, never an error.
#[must_use]
pub fn find_routes(graph: &RouteGraph, index: &NodeIndex, query: &RouteQuery) -> Vec<RoutePath> {
    let mut paths = enumerate_routes(graph, index, query);
    rank(&mut paths, query.sort);
    paths
}

/// Enumerate every qualifying path for `query` in discovery (FIFO) order.
#[must_use]
pub fn enumerate_routes(
    graph: &RouteGraph,
    index: &NodeIndex,
    query: &RouteQuery,
) -> Vec<RoutePath> {
    if query.is_blank() {
        return Vec::new();
    }

    let target_term = query.target.trim().to_lowercase();
    // Target strictness is decided once against the full node universe,
    // not per candidate.
    let target_mode = MatchMode::for_term(&target_term, graph, index);

    // Only nodes with outgoing routes can start a path.
    let start_nodes: BTreeSet<String> = if query.source.trim().is_empty() {
        // Open-ended "where can I reach X from" query.
        graph.source_nodes().map(str::to_string).collect()
    } else {
        matcher::resolve_terms(&query.source, graph.source_nodes(), graph, index)
    };

    // The hop bound is caller-supplied configuration; the engine never
    // second-guesses it. Any interactive limit lives at the app boundary.
    let max_hops = query.max_hops as usize;

    let mut results = Vec::new();
    let mut queue: VecDeque<RoutePath> = start_nodes.iter().map(|s| RoutePath::seed(s)).collect();

    while let Some(path) = queue.pop_front() {
        // The trivial seed is never a result; a reported route needs at
        // least one hop.
        if path.hops() >= 1 {
            let is_target = target_term.is_empty()
                || matcher::node_matches(graph, &path.terminal, &target_term, target_mode);
            let within_days = query.max_days.is_none_or(|cap| path.total_days <= cap);
            if is_target && within_days {
                results.push(path.clone());
            }
        }

        if path.hops() >= max_hops {
            continue;
        }

        for (neighbor, edge) in graph.neighbors(&path.terminal) {
            // Never route back through another valid starting point,
            // unless that start is itself the requested target.
            if start_nodes.contains(neighbor) && neighbor.to_lowercase() != target_term {
                continue;
            }
            // Simple paths only.
            if path.visits(neighbor) {
                continue;
            }
            if let Some(cap) = query.max_days {
                if path.total_days.saturating_add(edge.days) > cap {
                    continue;
                }
            }
            queue.push_back(path.extend(neighbor, edge));
        }
    }

    results
}

// =============================================================================
// RANKING
// =============================================================================

/// Stable ascending sort by the chosen key.
///
/// Enumeration order is hop-ascending, so hop ranking is effectively a
/// no-op and day-ranking ties fall back to hop count via stability.
pub fn rank(paths: &mut [RoutePath], key: SortKey) {
    match key {
        SortKey::Hops => paths.sort_by_key(RoutePath::hops),
        SortKey::Days => paths.sort_by_key(|p| p.total_days),
    }
}

/// Group ranked paths by their source node, in sorted source order.
///
/// This is the grouping the presentation layer shows; within each group
/// the incoming ranking order is preserved.
#[must_use]
pub fn group_by_source(paths: Vec<RoutePath>) -> BTreeMap<String, Vec<RoutePath>> {
    let mut groups: BTreeMap<String, Vec<RoutePath>> = BTreeMap::new();
    for path in paths {
        groups.entry(path.source.clone()).or_default().push(path);
    }
    groups
}

// =============================================================================
// UNCONSTRAINED SHORTEST PATH
// =============================================================================

/// Hop-minimal path between two exactly named nodes, or `None` when no
/// route exists.
///
/// Unit-cost BFS: edge day costs are ignored, as are the hop/day ceilings
/// and the start-node re-entry rule of the constrained enumerator. The
/// `start == end` request short-circuits to the single-node path.
#[must_use]
pub fn shortest_route(graph: &RouteGraph, start: &str, end: &str) -> Option<Vec<String>> {
    if start == end {
        return Some(vec![start.to_string()]);
    }

    let mut visited: BTreeSet<&str> = BTreeSet::new();
    visited.insert(start);
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(path) = queue.pop_front() {
        let node = path.last().copied()?;
        for (neighbor, _edge) in graph.neighbors(node) {
            if !visited.insert(neighbor) {
                continue;
            }
            let mut next = path.clone();
            next.push(neighbor);
            if neighbor == end {
                return Some(next.into_iter().map(str::to_string).collect());
            }
            queue.push_back(next);
        }
    }

    None
}

// =============================================================================
// TESTS
// =============================================================================
