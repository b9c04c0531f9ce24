//! Shared notebook model for the viewer `server` and `client`.
//!
//! This crate owns the data both sides agree on: the static assignment
//! catalog with its outlines, the `.ipynb` document schema, and the contract
//! handed to the external kernel bootstrap library. It has no browser or
//! server dependencies so every rule here is testable natively.

pub mod catalog;
pub mod document;
pub mod kernel;

mod builtin;

pub use catalog::{Catalog, CatalogEntry, CatalogSummary, Outline, Section};
pub use document::{Cell, CellKind, Document, DocumentError, Source};
pub use kernel::{BootstrapConfig, ConnectionMode, KernelStatus, PollPolicy, ServerSettings};
