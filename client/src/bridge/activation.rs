//! Connect, wait for the kernel, then follow its status.

#[cfg(test)]
#[path = "activation_test.rs"]
mod activation_test;

use std::future::Future;
use std::time::Duration;

use notebook::kernel::is_ready_status;
use notebook::{BootstrapConfig, KernelStatus, PollPolicy};

use super::{BridgeError, KernelBootstrap, KernelConnection, KernelHandle};

/// Run one activation against `bootstrap`.
///
/// `report` receives every status transition: `Connecting` before the
/// bootstrap call and again once editors are attached (so the caller can
/// disable their run buttons), then `Ready` when the kernel reports
/// `idle`/`ready`, or `Error` on failure. The kernel connection is attached
/// asynchronously by the library, so it is polled every `policy.interval`
/// for at most `policy.max_attempts` attempts using `sleep`. Polling stops
/// early once `alive` returns `false`.
///
/// # Errors
///
/// Returns the [`BridgeError`] that ended activation. Apart from
/// [`BridgeError::Cancelled`] it has already been reported as
/// `KernelStatus::Error` and logged.
pub async fn activate<B, S, F, A, R>(
    bootstrap: &B,
    config: &BootstrapConfig,
    policy: PollPolicy,
    sleep: S,
    alive: A,
    report: R,
) -> Result<(), BridgeError>
where
    B: KernelBootstrap,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    A: Fn() -> bool,
    R: Fn(KernelStatus) + Clone + 'static,
{
    log::info!(
        "kernel bootstrap: base={} ws={}",
        config.server_settings.base_url,
        config.server_settings.ws_url
    );
    report(KernelStatus::Connecting);

    let handle = match bootstrap.bootstrap(config).await {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("{err}");
            report(KernelStatus::Error);
            return Err(err);
        }
    };
    report(KernelStatus::Connecting);

    let kernel = match wait_for_kernel(&handle, policy, sleep, alive).await {
        Ok(kernel) => kernel,
        Err(BridgeError::Cancelled) => {
            log::debug!("kernel polling stopped: viewer closed");
            return Err(BridgeError::Cancelled);
        }
        Err(err) => {
            log::error!("{err} ({}ms apart)", policy.interval.as_millis());
            report(KernelStatus::Error);
            return Err(err);
        }
    };

    let on_change = report.clone();
    kernel.on_status_changed(Box::new(move |status| {
        log::debug!("kernel status changed: {status}");
        if is_ready_status(&status) {
            on_change(KernelStatus::Ready);
        }
    }));

    let current = kernel.status();
    log::info!("kernel attached, status={current}");
    if is_ready_status(&current) {
        report(KernelStatus::Ready);
    }
    Ok(())
}

async fn wait_for_kernel<H, S, F, A>(
    handle: &H,
    policy: PollPolicy,
    sleep: S,
    alive: A,
) -> Result<H::Connection, BridgeError>
where
    H: KernelHandle,
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
    A: Fn() -> bool,
{
    for attempt in 1..=policy.max_attempts {
        sleep(policy.interval).await;
        if !alive() {
            return Err(BridgeError::Cancelled);
        }
        if let Some(kernel) = handle.kernel() {
            return Ok(kernel);
        }
        log::debug!("waiting for kernel: attempt {attempt}/{}", policy.max_attempts);
    }
    Err(BridgeError::Timeout { attempts: policy.max_attempts })
}
