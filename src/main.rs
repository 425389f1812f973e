//! Driverays API main entry point
//!
//! This is the command-line interface that configures and runs the
//! scraping proxy server.

use anyhow::Context;
use clap::Parser;
use driverays_api::config::{load_or_default, Config};
use driverays_api::scraper::{HttpFetcher, Scraper};
use driverays_api::url::SiteUrls;
use driverays_api::{router, AppState, Assembler, RateLimit, ResponseCache};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Driverays API: a JSON proxy for the driverays movie catalog
///
/// Scrapes listings, genres, search results and title details from the
/// upstream site and serves them as paginated JSON with caching and
/// per-client rate limiting.
#[derive(Parser, Debug)]
#[command(name = "driverays-api")]
#[command(version = "1.0.0")]
#[command(about = "A JSON proxy for the driverays movie catalog", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind to, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    serve(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("driverays_api=info,warn"),
            1 => EnvFilter::new("driverays_api=debug,info"),
            2 => EnvFilter::new("driverays_api=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Wires the scraper, cache and limiter together and serves until shutdown
async fn serve(config: Config) -> anyhow::Result<()> {
    tracing::info!("Upstream site: {}", config.upstream.base_url);

    let fetcher = HttpFetcher::from_config(&config.upstream).context("Failed to build HTTP client")?;
    let scraper = Scraper::new(Arc::new(fetcher), SiteUrls::new(config.upstream.base_url.clone()));
    let cache = Arc::new(ResponseCache::new(config.cache.ttl_secs));
    spawn_cache_sweep(cache.clone(), Duration::from_secs(config.cache.sweep_secs));
    let assembler = Assembler::new(scraper, cache);

    let limit = Arc::new(RateLimit::new(&config.rate_limit));
    spawn_limiter_cleanup(limit.clone(), Duration::from_secs(config.rate_limit.window_secs));

    let app = router(AppState::new(assembler), limit);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server running at http://{}", addr);
    tracing::info!("API docs at http://{}/api-docs", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("Server error")?;

    Ok(())
}

/// Periodically forgets clients whose request budget has refilled
fn spawn_limiter_cleanup(limit: Arc<RateLimit>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            limit.retain_recent();
            tracing::trace!("Rate limiter tracking {} clients", limit.tracked_clients());
        }
    });
}

/// Periodically drops expired cache entries that were never read again
fn spawn_cache_sweep(cache: Arc<ResponseCache>, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            let purged = cache.purge_stale();
            if purged > 0 {
                tracing::debug!("Purged {} stale cache entries", purged);
            }
        }
    });
}
