//! Notebook viewer state: document load lifecycle and kernel activation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Document fetches are not queued or deduplicated. When the document
//! location changes while a fetch is still in flight, both completions
//! arrive and may arrive out of order. `DocumentState` remembers the
//! location it is waiting for and drops any completion for another one.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use notebook::{Document, DocumentError, KernelStatus};

use crate::util::cells::{RenderedCell, render_cells};

/// What the document area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<RenderedCell>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentState {
    target: Option<String>,
    pub load: LoadState,
}

impl DocumentState {
    /// Start waiting for `location`, replacing any earlier request.
    pub fn begin(&mut self, location: &str) {
        self.target = Some(location.to_owned());
        self.load = LoadState::Loading;
    }

    /// Apply a completed fetch. Returns `false` (and changes nothing) when the
    /// completion belongs to a superseded request.
    pub fn finish(&mut self, location: &str, result: Result<Document, DocumentError>) -> bool {
        if self.target.as_deref() != Some(location) {
            return false;
        }
        self.load = match result {
            Ok(document) => LoadState::Ready(render_cells(&document)),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        true
    }
}

/// Live execution state for the open notebook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KernelState {
    /// Set once activation starts. Cleared only when a failed bootstrap left
    /// the page unchanged.
    pub active: bool,
    pub status: KernelStatus,
}

impl KernelState {
    /// Claim activation. Returns `false` when it already happened.
    pub fn begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.status = KernelStatus::Connecting;
        true
    }

    /// Give activation back after a failure the user can retry. The status
    /// stays as reported.
    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn set_status(&mut self, status: KernelStatus) {
        self.status = status;
    }
}

/// Indicator dot modifier for a kernel status.
pub fn kernel_status_class(status: KernelStatus) -> &'static str {
    match status {
        KernelStatus::Ready => "kernel-status__dot--ready",
        KernelStatus::Connecting => "kernel-status__dot--connecting",
        KernelStatus::Disconnected => "kernel-status__dot--idle",
        KernelStatus::Error => "kernel-status__dot--error",
    }
}
