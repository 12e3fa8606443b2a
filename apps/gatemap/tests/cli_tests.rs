//! Integration tests for Gatemap CLI commands.
//!
//! Uses tempfile for testing snapshot loading from disk.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use gatemap::cli::{cmd_nodes, cmd_path, cmd_routes, cmd_suggest, load_graph};
use gatemap_core::{RouteQuery, SortKey};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a temporary directory for tests.
fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write the reference snapshot: A->B (10), B->C (10), A->C (30).
fn create_snapshot_json(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("trackers.json");
    let content = r#"{
        "routeInfo": {
            "Alpha": {
                "Beta":  {"days": 10, "reqs": "be active", "active": "yes", "updated": "2025-10"},
                "Gamma": {"days": 30, "reqs": "interview", "active": "no", "updated": "2025-09"}
            },
            "Beta": {
                "Gamma": {"days": 10, "reqs": "ratio 1.0", "active": "open", "updated": "2025-11"}
            }
        },
        "unlockInviteClass": {
            "Alpha": [90, "Elite"]
        },
        "abbrList": {
            "Gamma": "GMA"
        }
    }"#;
    std::fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// SNAPSHOT LOADING TESTS
// =============================================================================

#[test]
fn test_load_snapshot() {
    let temp = create_temp_dir();
    let path = create_snapshot_json(&temp);

    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.short_code("Gamma"), "GMA");
}

#[test]
fn test_load_missing_file_fails() {
    let temp = create_temp_dir();
    let result = load_graph(&temp.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_malformed_json_fails() {
    let temp = create_temp_dir();
    let path = temp.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let result = load_graph(&path);
    assert!(result.is_err());
}

// =============================================================================
// ROUTES COMMAND TESTS
// =============================================================================

#[test]
fn test_routes_day_sort_prefers_indirect_route() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let query = RouteQuery::between("alpha", "gamma")
        .with_max_hops(2)
        .sorted_by(SortKey::Days);
    let out = cmd_routes(&graph, &query).unwrap();

    assert!(out.contains("2 route(s) found"));
    // The two-hop route costs 20 days, the direct one 30.
    let indirect = out.find("2 hop(s), 20 day(s)").unwrap();
    let direct = out.find("1 hop(s), 30 day(s)").unwrap();
    assert!(indirect < direct);
}

#[test]
fn test_routes_day_ceiling_excludes_direct_route() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let query = RouteQuery::between("alpha", "gamma")
        .with_max_hops(2)
        .with_max_days(25);
    let out = cmd_routes(&graph, &query).unwrap();

    assert!(out.contains("1 route(s) found"));
    assert!(out.contains("2 hop(s), 20 day(s)"));
    assert!(!out.contains("30 day(s)"));
}

#[test]
fn test_routes_renders_unlock_tier_and_hop_detail() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_routes(&graph, &RouteQuery::between("alpha", "beta")).unwrap();
    assert!(out.contains("== Alpha [ALP]  (invites unlock: Elite, 90d)"));
    assert!(out.contains("Alpha -> Beta: be active [yes, checked 2025-10]"));
}

#[test]
fn test_routes_unresolvable_terms_report_no_matches() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_routes(&graph, &RouteQuery::between("zzz", "yyy")).unwrap();
    assert_eq!(out, "No routes found matching your criteria\n");
}

// =============================================================================
// PATH / SUGGEST / NODES COMMAND TESTS
// =============================================================================

#[test]
fn test_path_finds_hop_minimal_route() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_path(&graph, "Alpha", "Gamma").unwrap();
    assert_eq!(out, "Alpha -> Gamma (1 hop(s))\n");
}

#[test]
fn test_path_reports_no_route() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_path(&graph, "Gamma", "Alpha").unwrap();
    assert_eq!(out, "no route from Gamma to Alpha\n");
}

#[test]
fn test_suggest_completes_last_term() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_suggest(&graph, "alpha, gam").unwrap();
    assert_eq!(out, "Gamma [GMA]\n");
}

#[test]
fn test_nodes_lists_everything_sorted() {
    let temp = create_temp_dir();
    let graph = load_graph(&create_snapshot_json(&temp)).unwrap();

    let out = cmd_nodes(&graph).unwrap();
    assert_eq!(out, "Alpha [ALP]\nBeta [BET]\nGamma [GMA]\n");
}
