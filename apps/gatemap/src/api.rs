//! # HTTP API
//!
//! Thin axum surface over the search engine for the web frontend. The
//! graph snapshot is loaded once, wrapped in an `Arc`, and shared
//! read-only across requests; every query is self-contained, so no
//! locking is needed anywhere.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use gatemap_core::{NodeIndex, RouteGraph, RoutePath, RouteQuery, SortKey, UnlockTier};
use gatemap_core::{find_routes, matcher, shortest_route};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

// =============================================================================
// STATE
// =============================================================================

/// Shared, immutable per-process state.
#[derive(Debug)]
pub struct AppState {
    graph: RouteGraph,
    index: NodeIndex,
}

impl AppState {
    /// Build state (and the derived node index) from a graph snapshot.
    #[must_use]
    pub fn new(graph: RouteGraph) -> Self {
        let index = NodeIndex::build(&graph);
        Self { graph, index }
    }
}

/// Build the API router over a graph snapshot.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/nodes", get(list_nodes))
        .route("/api/suggest", get(suggest))
        .route("/api/routes", get(routes))
        .route("/api/path/{from}/{to}", get(path))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve the API until the process is stopped.
pub async fn serve(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gatemap API listening");
    axum::serve(listener, router(state)).await
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct NodeInfo {
    name: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    unlock: Option<UnlockTier>,
}

#[derive(Debug, Deserialize)]
struct SuggestParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Deserialize)]
struct RouteParams {
    #[serde(default)]
    source: String,
    #[serde(default)]
    target: String,
    jumps: Option<u32>,
    days: Option<u64>,
    sort: Option<String>,
}

#[derive(Debug, Serialize)]
struct RoutesResponse {
    count: usize,
    results: Vec<RoutePath>,
}

#[derive(Debug, Serialize)]
struct PathResponse {
    found: bool,
    nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// =============================================================================
// HANDLERS
// =============================================================================

async fn list_nodes(State(state): State<Arc<AppState>>) -> Json<Vec<NodeInfo>> {
    let nodes = state
        .index
        .iter()
        .map(|name| NodeInfo {
            name: name.to_string(),
            code: state.graph.short_code(name),
            unlock: state.graph.unlock_tiers.get(name).cloned(),
        })
        .collect();
    Json(nodes)
}

async fn suggest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Json<Vec<NodeInfo>> {
    let matches = matcher::suggestions(&params.q, &state.graph, &state.index)
        .into_iter()
        .map(|name| NodeInfo {
            code: state.graph.short_code(&name),
            unlock: None,
            name,
        })
        .collect();
    Json(matches)
}

async fn routes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RouteParams>,
) -> Result<Json<RoutesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let sort = match params.sort.as_deref() {
        None => SortKey::default(),
        Some(raw) => raw.parse().map_err(|e| bad_request(format!("{e}")))?,
    };
    let jumps = params.jumps.unwrap_or(gatemap_core::DEFAULT_MAX_HOPS);
    if !(1..=crate::cli::MAX_JUMPS).contains(&jumps) {
        return Err(bad_request(format!(
            "jumps must be between 1 and {}",
            crate::cli::MAX_JUMPS
        )));
    }
    let query = RouteQuery {
        source: params.source,
        target: params.target,
        max_hops: jumps,
        max_days: params.days,
        sort,
    };

    let results = find_routes(&state.graph, &state.index, &query);
    debug!(count = results.len(), "route query served");
    Ok(Json(RoutesResponse {
        count: results.len(),
        results,
    }))
}

async fn path(
    State(state): State<Arc<AppState>>,
    Path((from, to)): Path<(String, String)>,
) -> Json<PathResponse> {
    // `None` is the explicit no-path signal; an empty node list never
    // doubles as one.
    match shortest_route(&state.graph, &from, &to) {
        Some(nodes) => Json(PathResponse { found: true, nodes }),
        None => Json(PathResponse {
            found: false,
            nodes: Vec::new(),
        }),
    }
}
