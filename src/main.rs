//! Pokedex - A command-line client for PokeAPI
//!
//! Browse location areas, explore them, and catch Pokemon.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{run, Config, PokeApiClient, ResponseCache, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so the prompt stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its sweep task
/// 4. Build the PokeAPI client around the cache
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
/// 6. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}, http_timeout={}s",
        config.cache_interval_secs, config.base_url, config.http_timeout_secs
    );

    let cache = Arc::new(
        ResponseCache::new(config.cache_interval()).context("Failed to create response cache")?,
    );
    let client =
        PokeApiClient::new(&config, cache.clone()).context("Failed to build PokeAPI client")?;
    let mut session = Session::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    run(&mut session, stdin, &mut stdout)
        .await
        .context("REPL terminated on I/O error")?;

    cache.shutdown();
    let stats = cache.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        hit_rate = stats.hit_rate(),
        "Pokedex closed"
    );
    Ok(())
}
