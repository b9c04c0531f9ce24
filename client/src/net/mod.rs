//! Network layer: notebook document fetches.

pub mod api;
