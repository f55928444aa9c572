use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripscout::api::ApiState;
use tripscout::{Catalog, PlaceQueryService, TripScoutConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripScoutConfig::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Fail fast: no catalog, no server.
    let catalog =
        Catalog::load(&config.catalog.data_path).context("Failed to load place catalog")?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.chatbot.timeout_seconds.into()))
        .build()
        .context("Failed to create HTTP client")?;

    let state = ApiState {
        query: PlaceQueryService::new(Arc::new(catalog)),
        chatbot: config.chatbot.clone(),
        http,
    };

    web::run(&config.server, state).await
}
