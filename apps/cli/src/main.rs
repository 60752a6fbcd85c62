//! ReadScout CLI — context-aware reading-URL resolution.
//!
//! Resolves syllabus topics to a single validated reading URL using
//! category-aware search queries, trust-based ranking, and liveness checks.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
