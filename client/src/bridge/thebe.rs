//! Bridge traits over the `window.thebelab` global.
//!
//! The library exposes `bootstrap(options)` returning a promise of a notebook
//! object. Its kernel hangs off `session.kernel` in newer releases and off
//! `notebook.cells[0].kernel` in older ones, and emits a Lumino-style
//! `statusChanged.connect(slot)` signal.

use js_sys::{Function, Promise, Reflect};
use notebook::BootstrapConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{BridgeError, KernelBootstrap, KernelConnection, KernelHandle};

/// Property lookup that treats `undefined` and `null` as absent.
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| property(err, "message").and_then(|m| m.as_string()))
        .unwrap_or_else(|| format!("{err:?}"))
}

pub struct ThebeBootstrap {
    library: JsValue,
}

impl ThebeBootstrap {
    /// Look up the library on the current window.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Unavailable`] when the CDN script has not loaded.
    pub fn from_window() -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::Unavailable)?;
        let library = property(&JsValue::from(window), "thebelab").ok_or(BridgeError::Unavailable)?;
        Ok(Self { library })
    }
}

impl KernelBootstrap for ThebeBootstrap {
    type Handle = ThebeHandle;

    async fn bootstrap(&self, config: &BootstrapConfig) -> Result<ThebeHandle, BridgeError> {
        let bootstrap = property(&self.library, "bootstrap")
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(BridgeError::Unavailable)?;
        let json = serde_json::to_string(config).map_err(|e| BridgeError::Bootstrap(e.to_string()))?;
        let options = js_sys::JSON::parse(&json).map_err(|e| BridgeError::Bootstrap(describe(&e)))?;
        let returned = bootstrap
            .call1(&self.library, &options)
            .map_err(|e| BridgeError::Bootstrap(describe(&e)))?;
        let notebook = match returned.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|e| BridgeError::Bootstrap(describe(&e)))?,
            Err(value) => value,
        };
        Ok(ThebeHandle { notebook })
    }
}

pub struct ThebeHandle {
    notebook: JsValue,
}

impl KernelHandle for ThebeHandle {
    type Connection = ThebeKernel;

    fn kernel(&self) -> Option<ThebeKernel> {
        property(&self.notebook, "session")
            .and_then(|session| property(&session, "kernel"))
            .or_else(|| {
                let inner = property(&self.notebook, "notebook")?;
                let cells = property(&inner, "cells")?;
                let first = Reflect::get_u32(&cells, 0).ok().filter(|c| !c.is_undefined())?;
                property(&first, "kernel")
            })
            .map(|kernel| ThebeKernel { kernel })
    }
}

pub struct ThebeKernel {
    kernel: JsValue,
}

impl KernelConnection for ThebeKernel {
    fn status(&self) -> String {
        property(&self.kernel, "status").and_then(|s| s.as_string()).unwrap_or_default()
    }

    fn on_status_changed(&self, callback: Box<dyn Fn(String)>) {
        let Some(signal) = property(&self.kernel, "statusChanged") else {
            log::warn!("kernel exposes no statusChanged signal");
            return;
        };
        let Some(connect) = property(&signal, "connect").and_then(|f| f.dyn_into::<Function>().ok()) else {
            log::warn!("statusChanged signal has no connect()");
            return;
        };
        let slot = Closure::<dyn Fn(JsValue, JsValue)>::new(move |_sender: JsValue, status: JsValue| {
            callback(status.as_string().unwrap_or_default());
        });
        if let Err(err) = connect.call1(&signal, &slot.into_js_value()) {
            log::warn!("statusChanged.connect failed: {}", describe(&err));
        }
    }
}
