//! Pokedex - A command-line PokeAPI explorer
//!
//! Pages through location areas, explores encounters and catches pokemon,
//! with every API response held in an expiring in-memory cache.

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, ExpiringCache, PokeApiClient, Session};

/// Main entry point for the Pokedex explorer.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache (starts its reaper)
/// 4. Build the API client and session
/// 5. Run the REPL until `exit`, end of input or Ctrl+C
/// 6. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; warn by default so they stay out of the REPL.
    // Override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_interval={}s, request_timeout={}s",
        config.api_base_url, config.cache_interval, config.request_timeout
    );

    let cache = ExpiringCache::new(config.cache_interval());
    let client = PokeApiClient::new(&config, cache)?;
    let mut session = Session::new(client);

    // Stdin is read on its own thread; the runtime never waits on it
    let input = repl::spawn_stdin_reader()?;
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl::run(&mut session, input, &mut stdout) => result?,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            println!();
        }
    }

    session.into_client().into_cache().shutdown().await;
    info!("Shutdown complete");

    Ok(())
}
