//! Reusable UI components for the catalog and viewer pages.
//!
//! DESIGN
//! ======
//! Components stay presentation-focused and receive state through props or
//! context, so page modules own the data flow.

pub mod breadcrumbs;
pub mod catalog_card;
pub mod kernel_status;
pub mod notebook_viewer;
pub mod outline_panel;
pub mod top_nav;
