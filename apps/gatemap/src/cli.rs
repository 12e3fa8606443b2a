//! # CLI Commands
//!
//! File loading and text rendering for the Gatemap binary. Each `cmd_*`
//! function renders its output to a returned `String` so the commands stay
//! testable without capturing stdout; `main.rs` does the printing.

use gatemap_core::{RouteGraph, RoutePath, RouteQuery, SearchEngine, SortKeyParseError, UnlockTier};
use std::path::Path;
use tracing::{debug, info};

/// Largest `--jumps` value the interfaces accept. Enumeration cost is
/// exponential in the hop bound, so the bound is checked here rather
/// than inside the engine.
pub const MAX_JUMPS: u32 = 10;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Could not read the snapshot file.
    #[error("failed to read route snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file was not valid JSON in the expected shape.
    #[error("failed to parse route snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Unrecognized sort key on the command line.
    #[error(transparent)]
    Sort(#[from] SortKeyParseError),
}

// =============================================================================
// SNAPSHOT LOADING
// =============================================================================

/// Load a route graph from a JSON snapshot file.
pub fn load_graph(path: &Path) -> Result<RouteGraph, CliError> {
    let raw = std::fs::read_to_string(path)?;
    let graph: RouteGraph = serde_json::from_str(&raw)?;
    info!(
        path = %path.display(),
        edges = graph.edge_count(),
        "route snapshot loaded"
    );
    Ok(graph)
}

// =============================================================================
// COMMANDS
// =============================================================================

/// `routes` — run a constrained search and render the grouped results.
pub fn cmd_routes(graph: &RouteGraph, query: &RouteQuery) -> Result<String, CliError> {
    let engine = SearchEngine::new(graph);
    let paths = engine.find_routes(query);
    debug!(found = paths.len(), "route search finished");

    if paths.is_empty() {
        return Ok("No routes found matching your criteria\n".to_string());
    }

    let mut out = format!("{} route(s) found\n", paths.len());
    for (source, group) in gatemap_core::group_by_source(paths) {
        out.push('\n');
        out.push_str(&render_source_header(&engine, &source));
        for path in &group {
            out.push_str(&render_path(&engine, path));
        }
    }
    Ok(out)
}

/// `path` — hop-minimal route between two exactly named nodes.
pub fn cmd_path(graph: &RouteGraph, from: &str, to: &str) -> Result<String, CliError> {
    let engine = SearchEngine::new(graph);
    match engine.shortest_route(from, to) {
        Some(nodes) => {
            let hops = nodes.len().saturating_sub(1);
            Ok(format!("{} ({} hop(s))\n", nodes.join(" -> "), hops))
        }
        None => Ok(format!("no route from {from} to {to}\n")),
    }
}

/// `suggest` — completion candidates for a partial query.
pub fn cmd_suggest(graph: &RouteGraph, term: &str) -> Result<String, CliError> {
    let engine = SearchEngine::new(graph);
    let mut out = String::new();
    for name in engine.suggest(term) {
        let code = engine.short_code(&name);
        out.push_str(&format!("{name} [{code}]\n"));
    }
    if out.is_empty() {
        out.push_str("no matches\n");
    }
    Ok(out)
}

/// `nodes` — the full node index with short codes.
pub fn cmd_nodes(graph: &RouteGraph) -> Result<String, CliError> {
    let engine = SearchEngine::new(graph);
    let mut out = String::new();
    for name in engine.nodes() {
        let code = engine.short_code(name);
        out.push_str(&format!("{name} [{code}]\n"));
    }
    Ok(out)
}

// =============================================================================
// RENDERING
// =============================================================================

fn render_source_header(engine: &SearchEngine<'_>, source: &str) -> String {
    let code = engine.short_code(source);
    match engine.unlock_tier(source) {
        Some(UnlockTier(days, tier)) => {
            format!("== {source} [{code}]  (invites unlock: {tier}, {days}d)\n")
        }
        None => format!("== {source} [{code}]\n"),
    }
}

fn render_path(engine: &SearchEngine<'_>, path: &RoutePath) -> String {
    let mut out = format!(
        "  -> {} [{}]  {} hop(s), {} day(s)\n",
        path.terminal,
        engine.short_code(&path.terminal),
        path.hops(),
        path.total_days,
    );
    for (i, edge) in path.edges.iter().enumerate() {
        out.push_str(&format!(
            "     {} -> {}: {} [{}, checked {}]\n",
            path.nodes[i],
            path.nodes[i + 1],
            edge.requirements,
            edge.status,
            edge.last_checked,
        ));
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gatemap_core::RouteEdge;

    fn sample_graph() -> RouteGraph {
        let mut graph = RouteGraph::new();
        graph.routes.entry("Alpha".to_string()).or_default().insert(
            "Beta".to_string(),
            RouteEdge {
                days: 30,
                requirements: "ratio 1.0".to_string(),
                status: "yes".to_string(),
                last_checked: "2025-11".to_string(),
            },
        );
        graph
            .unlock_tiers
            .insert("Alpha".to_string(), UnlockTier(90, "Elite".to_string()));
        graph
    }

    #[test]
    fn routes_renders_group_and_hop_lines() {
        let graph = sample_graph();
        let out = cmd_routes(&graph, &RouteQuery::between("alpha", "beta"));
        let out = out.unwrap_or_default();

        assert!(out.contains("1 route(s) found"));
        assert!(out.contains("== Alpha [ALP]"));
        assert!(out.contains("invites unlock: Elite, 90d"));
        assert!(out.contains("-> Beta [BET]  1 hop(s), 30 day(s)"));
        assert!(out.contains("Alpha -> Beta: ratio 1.0 [yes, checked 2025-11]"));
    }

    #[test]
    fn routes_reports_empty_result() {
        let graph = sample_graph();
        let out = cmd_routes(&graph, &RouteQuery::between("nope", "nothing"));
        assert_eq!(out.unwrap_or_default(), "No routes found matching your criteria\n");
    }

    #[test]
    fn path_renders_route_and_no_route() {
        let graph = sample_graph();
        let found = cmd_path(&graph, "Alpha", "Beta").unwrap_or_default();
        assert_eq!(found, "Alpha -> Beta (1 hop(s))\n");

        let missing = cmd_path(&graph, "Beta", "Alpha").unwrap_or_default();
        assert_eq!(missing, "no route from Beta to Alpha\n");
    }

    #[test]
    fn nodes_lists_index_with_codes() {
        let graph = sample_graph();
        let out = cmd_nodes(&graph).unwrap_or_default();
        assert_eq!(out, "Alpha [ALP]\nBeta [BET]\n");
    }
}
