//! Kernel backend resolution and the bootstrap contract.
//!
//! The execution library itself lives in the browser and is not part of this
//! workspace. This module fixes what the viewer hands to it: where the
//! backend is, which kernel to request, and which elements to convert.
//!
//! TRADE-OFFS
//! ==========
//! The wire shape mirrors the library's option object field for field
//! (camelCase) so the client can serialize it straight into a JS object.

#[cfg(test)]
#[path = "kernel_test.rs"]
mod kernel_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Selector marking code blocks the bootstrap library turns into editors.
pub const EXECUTABLE_SELECTOR: &str = r#"[data-executable="true"]"#;

/// Kernel requested when an entry does not say otherwise.
pub const DEFAULT_KERNEL_NAME: &str = "python3";

/// Lifecycle of the live-execution connection as shown to the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelStatus {
    #[default]
    Disconnected,
    Connecting,
    Ready,
    Error,
}

impl KernelStatus {
    /// Run controls are usable only once the backend reports ready.
    #[must_use]
    pub fn controls_enabled(self) -> bool {
        matches!(self, Self::Ready)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "Kernel Disconnected",
            Self::Connecting => "Connecting to Kernel...",
            Self::Ready => "Kernel Ready",
            Self::Error => "Kernel Error",
        }
    }
}

/// Kernel-reported status strings that mean "ready to execute".
#[must_use]
pub fn is_ready_status(status: &str) -> bool {
    matches!(status, "idle" | "ready")
}

/// How the backend is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionMode {
    /// The page origin reverse-proxies the backend.
    Proxied,
    /// The browser talks to an absolute backend address.
    Direct,
}

/// Server settings block of the bootstrap options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    pub base_url: String,
    pub ws_url: String,
    pub token: String,
    pub append_token: bool,
}

/// Resolve where the kernel backend lives.
///
/// No configured address (or an empty one) means proxied mode against
/// `origin`. The streaming address swaps the `http` scheme prefix for `ws`.
#[must_use]
pub fn resolve_server_settings(configured: Option<&str>, origin: &str) -> (ConnectionMode, ServerSettings) {
    let (mode, base_url) = match configured {
        Some(url) if !url.is_empty() => (ConnectionMode::Direct, url.to_owned()),
        _ => (ConnectionMode::Proxied, origin.to_owned()),
    };
    let ws_url = websocket_url(&base_url);
    (mode, ServerSettings { base_url, ws_url, token: String::new(), append_token: false })
}

/// `http://` -> `ws://`, `https://` -> `wss://`; anything else is unchanged.
#[must_use]
pub fn websocket_url(base_url: &str) -> String {
    match base_url.strip_prefix("http") {
        Some(rest) => format!("ws{rest}"),
        None => base_url.to_owned(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KernelOptions {
    pub name: String,
    pub kernel_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMirrorConfig {
    pub theme: String,
    pub mode: String,
    pub line_numbers: bool,
}

/// Full option object passed to the bootstrap library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapConfig {
    pub request_kernel: bool,
    pub use_binder: bool,
    pub use_jupyter_lite: bool,
    pub server_settings: ServerSettings,
    pub kernel_options: KernelOptions,
    pub selector: String,
    pub code_mirror_config: CodeMirrorConfig,
}

impl BootstrapConfig {
    /// Options requesting a `kernel_name` kernel from `server_settings` for
    /// every executable block on the page.
    #[must_use]
    pub fn new(server_settings: ServerSettings, kernel_name: &str) -> Self {
        Self {
            request_kernel: true,
            use_binder: false,
            use_jupyter_lite: false,
            server_settings,
            kernel_options: KernelOptions { name: kernel_name.to_owned(), kernel_name: kernel_name.to_owned() },
            selector: EXECUTABLE_SELECTOR.to_owned(),
            code_mirror_config: CodeMirrorConfig {
                theme: "material-palenight".to_owned(),
                mode: "python".to_owned(),
                line_numbers: true,
            },
        }
    }
}

/// Bounded polling for the asynchronously attached kernel connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    /// 200 ms x 150 attempts, 30 seconds in total.
    fn default() -> Self {
        Self { interval: Duration::from_millis(200), max_attempts: 150 }
    }
}

impl PollPolicy {
    /// Upper bound on time spent waiting for the connection.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}
