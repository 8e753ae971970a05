//! Read-only endpoint for the results file.
//!
//! `GET /api/results` returns `public/results.json`; anything else is served
//! from `public/` as static files.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

const PORT: u16 = 5001;
const PUBLIC_DIR: &str = "public";
const RESULTS_FILE: &str = "results.json";

/// Creates the router: the results endpoint plus the public directory.
fn create_router(public_dir: &Path) -> Router {
    Router::new()
        .route_service("/api/results", ServeFile::new(public_dir.join(RESULTS_FILE)))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let public_dir = Path::new(PUBLIC_DIR);
    if !public_dir.join(RESULTS_FILE).is_file() {
        log::warn!(
            "{} not found; /api/results will answer 404",
            public_dir.join(RESULTS_FILE).display()
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("Server is running on http://localhost:{PORT}");

    axum::serve(listener, create_router(public_dir))
        .await
        .context("serving results")?;
    Ok(())
}
