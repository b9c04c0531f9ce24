//! Catalog REST endpoints.
//!
//! `GET /api/catalog` lists summaries in definition order;
//! `GET /api/catalog/{slug}` returns the full entry with its outline.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use notebook::{CatalogEntry, CatalogSummary};

use crate::state::AppState;

pub async fn list_catalog(State(state): State<AppState>) -> Json<Vec<CatalogSummary>> {
    Json(state.catalog.summaries())
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CatalogEntry>, StatusCode> {
    match state.catalog.get(&slug) {
        Some(entry) => Ok(Json(entry.clone())),
        None => {
            tracing::debug!(%slug, "catalog entry not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
