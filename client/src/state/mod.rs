//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each model is a plain struct with explicit mutation methods. Components
//! own them inside `RwSignal`s, so every transition is unit-testable without
//! a browser.

pub mod outline;
pub mod ui;
pub mod viewer;
