//! Terracredit CLI - demo flows and catalog inspection.
//!
//! # Usage
//!
//! ```bash
//! # Print the seeded catalog
//! tc-cli listings
//!
//! # Same, as raw JSON snapshots
//! tc-cli listings --json
//!
//! # Search the seeded catalog
//! tc-cli search -q "Nakuru"
//!
//! # Scripted register/search/cart flow with live observers
//! tc-cli demo
//! ```
//!
//! This binary is the composition root: it constructs the [`Marketplace`]
//! explicitly and passes it down, rather than relying on a process-wide
//! global.
//!
//! [`Marketplace`]: terracredit_market::Marketplace

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use terracredit_market::{Marketplace, ThreadRngSource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(author, version, about = "Terracredit marketplace tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seeded catalog
    Listings {
        /// Emit raw JSON snapshots instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Search the seeded catalog
    Search {
        /// Free-text query matched against farmer name, location, and crops
        #[arg(short, long)]
        query: String,
    },
    /// Run a scripted register/search/cart flow with live observers
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let marketplace = Marketplace::with_sample_data(Arc::new(ThreadRngSource));

    match cli.command {
        Commands::Listings { json } => commands::catalog::listings(&marketplace, json)?,
        Commands::Search { query } => commands::catalog::search(&marketplace, &query),
        Commands::Demo => commands::demo::run(marketplace).await?,
    }

    Ok(())
}
