//! The `pagesnap` binary: serve the web form or take a one-shot snapshot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagesnap::fetch::PageFetcher;
use pagesnap::snapshot;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default URL for `snap` when none is given.
const DEFAULT_SNAP_URL: &str = "https://www.notion.so/pricing";

/// Default output file for `snap`, written to the working directory.
const DEFAULT_SNAP_FILE: &str = "snapshot.txt";

#[derive(Parser)]
#[command(name = "pagesnap", version, about = "Snapshot the paragraph text of web pages")]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web service.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },
    /// Fetch one URL and write its paragraph text to a file.
    Snap {
        /// URL to snapshot.
        #[arg(long, default_value = DEFAULT_SNAP_URL)]
        url: String,
        /// Output file (overwritten if it exists).
        #[arg(long, default_value = DEFAULT_SNAP_FILE)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("pagesnap={default_level}").parse()?),
        )
        .init();

    match cli.command {
        Commands::Serve { bind } => pagesnap::server::serve(bind).await,
        Commands::Snap { url, out } => snap(&url, &out).await,
    }
}

/// One linear run: fetch, extract, write, confirm. Any failure aborts
/// with a nonzero exit.
async fn snap(url: &str, out: &std::path::Path) -> Result<()> {
    let fetcher = PageFetcher::new().context("building page fetcher")?;

    let snapshot = snapshot::capture(&fetcher, url)
        .await
        .with_context(|| format!("capturing {url}"))?;

    snapshot
        .write_to(out)
        .with_context(|| format!("writing {}", out.display()))?;

    println!("Snapshot saved to {}", out.display());
    Ok(())
}
