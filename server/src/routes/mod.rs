//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the catalog API and Leptos SSR rendering under a
//! single Axum router. The hydration bundle is served from the Leptos site
//! root at `/pkg`; every other unmatched path falls through to the public
//! directory, which is where the notebook files live.

pub mod catalog;


use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API and health routes.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/api/catalog", get(catalog::list_catalog))
        .route("/api/catalog/{slug}", get(catalog::get_entry))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Static notebook files. Directory requests serve their `index.html`.
pub fn public_files(public_dir: &Path) -> ServeDir {
    ServeDir::new(public_dir).append_index_html_on_directories(true)
}

/// API routes + Leptos SSR + `/pkg` bundle + public files as fallback.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState, public_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(public_files(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
