//! Pokedex - An interactive PokeAPI client
//!
//! Starts the response cache, then runs the REPL on stdin/stdout.

use std::io::BufReader;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{run_repl, spawn_line_reader, Session};
use pokedex::{Cache, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so the REPL owns stdout)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and session
/// 5. Run the REPL until `exit`, end of input, or Ctrl+C
/// 6. Log cache statistics and stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines stay out of the way of the prompt;
    // override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_ttl={}s, sweep_interval={}s, strict_reads={}",
        config.api_base_url, config.cache_ttl, config.sweep_interval, config.strict_reads
    );

    let (cache, reaper) =
        Cache::with_read_mode(config.cache_ttl(), config.sweep_interval(), config.read_mode());
    info!("Response cache initialized");

    let client = PokeApiClient::new(config.api_base_url.as_str(), cache)
        .context("failed to build HTTP client")?;
    let mut session = Session::new(client.first_page_url());

    let input = spawn_line_reader(BufReader::new(std::io::stdin()))
        .context("failed to start input reader")?;
    let mut stdout = std::io::stdout();

    run_repl(input, &mut stdout, &mut session, &client, shutdown_signal())
        .await
        .context("REPL terminated")?;

    let stats = client.cache().stats().await;
    info!(
        "Cache statistics: entries={}, hits={}, misses={}, reaped={}, hit_rate={:.1}%",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.hit_rate() * 100.0
    );

    reaper.shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C.
///
/// If the handler cannot be installed the REPL simply runs until `exit` or
/// end of input.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(err) => {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await
        }
    }
}
