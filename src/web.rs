//! Web server bootstrap: CORS, API routes, and static image assets

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::{self, ApiState};
use crate::config::ServerConfig;

pub async fn run(server: &ServerConfig, state: ApiState) -> Result<()> {
    // The frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", api::router(state))
        .nest_service("/Image", ServeDir::new(&server.assets_dir))
        .layer(cors);

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", server.port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
