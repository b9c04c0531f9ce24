//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after startup, so it is shared by `'static`
//! reference and needs no locking.

use notebook::Catalog;

#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: &'static Catalog,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}
