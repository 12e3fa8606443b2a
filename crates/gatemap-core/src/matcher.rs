//! # Fuzzy Matcher
//!
//! Resolves free-text query terms to concrete node names.
//!
//! Matching is exact-match-first: if a term equals some node's full name or
//! short code (case-insensitively), matching for that term degrades to
//! exact equality so that "red" selects RED and not every name containing
//! the letters. Otherwise names are substring-matched while short codes are
//! only ever equality-matched; substring matching 2-3 letter codes would be
//! hopelessly over-broad.

use crate::graph::{NodeIndex, RouteGraph};
use std::collections::BTreeSet;

/// Maximum number of interactive suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

// =============================================================================
// MATCH MODE
// =============================================================================

/// How a single term compares against node names, decided once per term
/// before scanning nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The term equals some node's name or short code: only exact
    /// (case-insensitive) equality qualifies.
    Exact,
    /// No strict hit anywhere: names are substring-matched, short codes
    /// equality-matched.
    Substring,
}

impl MatchMode {
    /// Decide the mode for a lower-cased, trimmed term against the full
    /// node universe.
    ///
    /// Only identity codes count toward strictness; the prefix-fallback
    /// display code would make almost any 3-letter term "strict".
    #[must_use]
    pub fn for_term(term: &str, graph: &RouteGraph, index: &NodeIndex) -> Self {
        let strict = index.iter().any(|node| {
            node.to_lowercase() == term
                || graph
                    .identity_code(node)
                    .is_some_and(|code| code.to_lowercase() == term)
        });
        if strict { Self::Exact } else { Self::Substring }
    }
}

/// Test one node against one lower-cased term under the given mode.
#[must_use]
pub fn node_matches(graph: &RouteGraph, node: &str, term: &str, mode: MatchMode) -> bool {
    let name = node.to_lowercase();
    match mode {
        MatchMode::Exact => {
            name == term
                || graph
                    .identity_code(node)
                    .is_some_and(|code| code.to_lowercase() == term)
        }
        MatchMode::Substring => {
            name.contains(term) || graph.short_code(node).to_lowercase() == term
        }
    }
}

// =============================================================================
// TERM RESOLUTION
// =============================================================================

/// Split a composite query into lower-cased, trimmed, non-empty terms.
#[must_use]
pub fn split_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve a composite query against a candidate set of nodes.
///
/// Each comma-separated term is resolved independently (with its own mode
/// decision against the full node universe) and the results are unioned.
/// An unresolvable query is an empty set, not an error.
#[must_use]
pub fn resolve_terms<'a, I>(
    query: &str,
    candidates: I,
    graph: &RouteGraph,
    index: &NodeIndex,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let terms: Vec<(String, MatchMode)> = split_terms(query)
        .into_iter()
        .map(|term| {
            let mode = MatchMode::for_term(&term, graph, index);
            (term, mode)
        })
        .collect();

    if terms.is_empty() {
        return BTreeSet::new();
    }

    candidates
        .into_iter()
        .filter(|node| {
            terms
                .iter()
                .any(|(term, mode)| node_matches(graph, node, term, *mode))
        })
        .map(str::to_string)
        .collect()
}

// =============================================================================
// SUGGESTIONS
// =============================================================================

/// Completion candidates for the last (partially typed) comma-separated
/// term of a query, in node-index order, capped at [`MAX_SUGGESTIONS`].
///
/// Always substring mode: a strict hit on a fully typed term should not
/// stop the user from seeing longer names while they keep typing.
#[must_use]
pub fn suggestions(query: &str, graph: &RouteGraph, index: &NodeIndex) -> Vec<String> {
    let last = query.split(',').next_back().unwrap_or("").trim().to_lowercase();
    if last.is_empty() {
        return Vec::new();
    }

    index
        .iter()
        .filter(|node| node_matches(graph, node, &last, MatchMode::Substring))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouteEdge;

    fn graph_with_nodes(names: &[&str]) -> (RouteGraph, NodeIndex) {
        let mut graph = RouteGraph::new();
        for name in names {
            // Self-contained star: every node routes to a common sink so it
            // appears in the index.
            graph
                .routes
                .entry((*name).to_string())
                .or_default()
                .insert("ZSink".to_string(), RouteEdge::with_days(1));
        }
        let index = NodeIndex::build(&graph);
        (graph, index)
    }

    #[test]
    fn strict_name_hit_degrades_to_exact() {
        let (graph, index) = graph_with_nodes(&["RED", "Redacted"]);

        // "red" equals RED's full name case-insensitively, so matching is
        // exact and Redacted does not qualify.
        let hits = resolve_terms("red", index.iter(), &graph, &index);
        let hits: Vec<_> = hits.into_iter().collect();
        assert_eq!(hits, vec!["RED"]);
    }

    #[test]
    fn substring_mode_when_no_strict_hit() {
        let (graph, index) = graph_with_nodes(&["RED", "Redacted"]);

        let hits = resolve_terms("redac", index.iter(), &graph, &index);
        let hits: Vec<_> = hits.into_iter().collect();
        assert_eq!(hits, vec!["Redacted"]);
    }

    #[test]
    fn short_code_matches_only_exactly() {
        let (graph, index) = graph_with_nodes(&["PassThePopcorn", "Orpheus"]);

        // "ptp" hits PassThePopcorn's derived code exactly.
        let hits = resolve_terms("ptp", index.iter(), &graph, &index);
        assert!(hits.contains("PassThePopcorn"));

        // A code fragment is not a match; codes are never substring-matched.
        let hits = resolve_terms("pt", index.iter(), &graph, &index);
        assert!(!hits.contains("PassThePopcorn"));
    }

    #[test]
    fn composite_query_unions_terms() {
        let (graph, index) = graph_with_nodes(&["Alpha", "Beta", "Gamma"]);

        let hits = resolve_terms("alpha, beta", index.iter(), &graph, &index);
        let hits: Vec<_> = hits.into_iter().collect();
        assert_eq!(hits, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn per_term_mode_is_independent() {
        let (graph, index) = graph_with_nodes(&["RED", "Redacted", "Orpheus"]);

        // "red" is strict (matches RED exactly); "orph" is substring.
        let hits = resolve_terms("red, orph", index.iter(), &graph, &index);
        let hits: Vec<_> = hits.into_iter().collect();
        assert_eq!(hits, vec!["Orpheus", "RED"]);
    }

    #[test]
    fn blank_or_comma_only_query_resolves_to_nothing() {
        let (graph, index) = graph_with_nodes(&["Alpha"]);
        assert!(resolve_terms("", index.iter(), &graph, &index).is_empty());
        assert!(resolve_terms(" , ,", index.iter(), &graph, &index).is_empty());
    }

    #[test]
    fn candidates_restrict_the_result() {
        let (graph, index) = graph_with_nodes(&["Alpha", "Alphabet"]);

        let hits = resolve_terms("alpha", ["Alphabet"].into_iter(), &graph, &index);
        let hits: Vec<_> = hits.into_iter().collect();
        // "alpha" strict-matches Alpha, so exact mode applies; Alphabet is
        // the only candidate and it does not qualify.
        assert!(hits.is_empty());
    }

    #[test]
    fn suggestions_use_last_term_and_cap() {
        let names: Vec<String> = (0..12).map(|i| format!("Node{i:02}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (graph, index) = graph_with_nodes(&name_refs);

        let sug = suggestions("whatever, node", &graph, &index);
        assert_eq!(sug.len(), MAX_SUGGESTIONS);
        assert_eq!(sug[0], "Node00");

        assert!(suggestions("", &graph, &index).is_empty());
        assert!(suggestions("alpha, ", &graph, &index).is_empty());
    }

    #[test]
    fn suggestions_stay_substring_even_on_strict_hit() {
        let (graph, index) = graph_with_nodes(&["RED", "Redacted"]);
        let sug = suggestions("red", &graph, &index);
        assert_eq!(sug, vec!["RED", "Redacted"]);
    }
}
