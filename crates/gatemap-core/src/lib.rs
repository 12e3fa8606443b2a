//! # Gatemap Core
//!
//! The deterministic route-search engine: given an immutable directed graph
//! of invite routes between gated communities, it resolves fuzzy source and
//! target queries, enumerates every qualifying path under hop and
//! waiting-time ceilings, ranks the results, and answers point-to-point
//! hop-minimal path queries.
//!
//! Everything here is a pure, synchronous function over a read-only graph
//! snapshot. Data loading, serving and rendering live in the app layer.

pub mod engine;
pub mod graph;
pub mod matcher;
pub mod primitives;
pub mod query;
pub mod search;

pub use engine::SearchEngine;
pub use graph::{NodeIndex, RouteGraph};
pub use matcher::MatchMode;
pub use primitives::{RouteEdge, UnlockTier, DEFAULT_MAX_HOPS};
pub use query::{RouteQuery, SortKey, SortKeyParseError};
pub use search::{enumerate_routes, find_routes, group_by_source, rank, shortest_route, RoutePath};
