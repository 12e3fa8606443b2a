//! Gatemap binary entry point.
//!
//! Loads a JSON route snapshot, then answers invite-route queries from the
//! command line or serves them over HTTP.

use clap::{Parser, Subcommand};
use gatemap::api::{self, AppState};
use gatemap::cli::{self, CliError};
use gatemap_core::{RouteQuery, SortKey};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "gatemap", version, about = "Invite-route search for gated communities")]
struct Cli {
    /// Path to the JSON route snapshot.
    #[arg(short, long, global = true, default_value = "trackers.json")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for invite routes under hop and waiting-time ceilings.
    Routes {
        /// Source query; comma-separated and fuzzy ("MAM, red").
        #[arg(short, long, default_value = "")]
        source: String,
        /// Target query; fuzzy. Empty lists everything reachable.
        #[arg(short, long, default_value = "")]
        target: String,
        /// Maximum number of hops.
        #[arg(
            short,
            long,
            default_value_t = gatemap_core::DEFAULT_MAX_HOPS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(cli::MAX_JUMPS)),
        )]
        jumps: u32,
        /// Maximum cumulative waiting time in days.
        #[arg(short, long)]
        days: Option<u64>,
        /// Result order: `jumps` or `days`.
        #[arg(long, default_value = "jumps", value_parser = SortKey::from_str)]
        sort: SortKey,
    },
    /// Hop-minimal path between two exactly named communities.
    Path {
        /// Start community name (exact).
        from: String,
        /// End community name (exact).
        to: String,
    },
    /// Completion candidates for a partial name or short code.
    Suggest {
        /// Partial query; the last comma-separated term is completed.
        term: String,
    },
    /// List every known community with its short code.
    Nodes,
    /// Serve the HTTP API.
    Serve {
        /// Bind address.
        #[arg(long, default_value = "127.0.0.1:3600")]
        addr: String,
    },
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let graph = cli::load_graph(&cli.graph)?;

    match cli.command {
        Commands::Routes {
            source,
            target,
            jumps,
            days,
            sort,
        } => {
            let query = RouteQuery {
                source,
                target,
                max_hops: jumps,
                max_days: days,
                sort,
            };
            print!("{}", cli::cmd_routes(&graph, &query)?);
        }
        Commands::Path { from, to } => {
            print!("{}", cli::cmd_path(&graph, &from, &to)?);
        }
        Commands::Suggest { term } => {
            print!("{}", cli::cmd_suggest(&graph, &term)?);
        }
        Commands::Nodes => {
            print!("{}", cli::cmd_nodes(&graph)?);
        }
        Commands::Serve { addr } => {
            let state = Arc::new(AppState::new(graph));
            api::serve(state, &addr).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
