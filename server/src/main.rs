#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use notebook::Catalog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| e.to_string())?;

    let catalog = Catalog::builtin();
    for slug in catalog.duplicate_slugs() {
        tracing::warn!(%slug, "duplicate catalog definition ignored");
    }
    if catalog.is_empty() {
        tracing::warn!("catalog is empty");
    }
    if !config.public_dir.is_dir() {
        tracing::warn!(public_dir = %config.public_dir.display(), "public directory missing; notebooks will 404");
    }

    let app = routes::leptos_app(state::AppState::new(catalog), &config.public_dir)?;
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;

    tracing::info!(%addr, entries = catalog.len(), "notebook viewer listening");
    axum::serve(listener, app).await.map_err(|e| format!("serve: {e}"))
}
