use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bluesky_cite::config::Config;
use bluesky_cite::page;
use bluesky_cite::translators;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    init_tracing()?;

    // Load and validate configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let url = std::env::args()
        .nth(1)
        .context("Usage: bluesky-cite <post-url>")?;

    info!(api_base = %config.api_base, %url, "Starting bluesky-cite");

    let registry = translators::default_registry(&config);
    let translator = registry
        .find_translator(&url)
        .with_context(|| format!("No translator matches URL: {url}"))?;
    let url = translator.normalize_url(&url);

    // The snapshot references the page as the user saw it, so load it
    // before talking to the API.
    let doc = page::fetch_document(&url, config.http_timeout)
        .await
        .context("Failed to load source page")?;

    match translator.translate(&url, &doc).await? {
        Some(item) => {
            let json =
                serde_json::to_string_pretty(&item).context("Failed to serialize record")?;
            println!("{json}");
            info!(site = translator.site_id(), "Record emitted");
        }
        None => {
            info!(%url, "No record produced for URL");
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bluesky_cite=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        // Structured JSON logging for production
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        // Pretty-printed logging for development
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}
