//! Execution bridge to the external kernel bootstrap library.
//!
//! SYSTEM CONTEXT
//! ==============
//! Live execution is provided by a JS library loaded from a CDN that finds
//! executable code blocks, swaps them for editors and connects them to a
//! Jupyter backend. This module only drives it: `activation` holds the
//! connect/poll/subscribe sequence written against the traits below, and
//! `thebe` implements those traits over `window.thebelab` in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends as `KernelStatus::Error` in the viewer. Nothing here is
//! fatal to the page: code cells simply stay static.

pub mod activation;
#[cfg(feature = "hydrate")]
pub mod thebe;

use std::future::Future;

use notebook::BootstrapConfig;

pub use activation::activate;

/// Why live execution could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    /// The bootstrap library is not present on the page.
    #[error("kernel bootstrap library is not loaded")]
    Unavailable,
    /// The library rejected the options or threw while bootstrapping.
    #[error("kernel bootstrap failed: {0}")]
    Bootstrap(String),
    /// No kernel connection appeared within the polling budget.
    #[error("kernel did not attach after {attempts} attempts")]
    Timeout { attempts: u32 },
    /// The viewer went away while waiting for the kernel.
    #[error("kernel activation cancelled")]
    Cancelled,
}

impl BridgeError {
    /// Whether the page is unchanged, so activation may be tried again.
    /// After a timeout the library has already replaced the code blocks.
    #[must_use]
    pub fn allows_retry(&self) -> bool {
        matches!(self, Self::Unavailable | Self::Bootstrap(_))
    }
}

/// Entry point of the bootstrap library.
pub trait KernelBootstrap {
    type Handle: KernelHandle;

    /// Convert the page's executable blocks and start connecting.
    fn bootstrap(&self, config: &BootstrapConfig) -> impl Future<Output = Result<Self::Handle, BridgeError>>;
}

/// Result of a bootstrap; the kernel connection attaches to it later.
pub trait KernelHandle {
    type Connection: KernelConnection;

    /// The kernel connection, once it exists.
    fn kernel(&self) -> Option<Self::Connection>;
}

/// A live kernel connection.
pub trait KernelConnection {
    /// Status string as reported by the kernel (`idle`, `busy`, ...).
    fn status(&self) -> String;

    /// Call `callback` with the new status on every status change.
    fn on_status_changed(&self, callback: Box<dyn Fn(String)>);
}
