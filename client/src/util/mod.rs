//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts stay testable natively.

pub mod cells;
pub mod dark_mode;
pub mod dom;
pub mod highlight;
pub mod markdown;
