use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;
use notebook::kernel::resolve_server_settings;

use super::*;

#[derive(Clone, Default)]
struct StubKernel {
    status: Rc<RefCell<String>>,
    listeners: Rc<RefCell<Vec<Box<dyn Fn(String)>>>>,
}

impl StubKernel {
    fn with_status(status: &str) -> Self {
        let kernel = Self::default();
        *kernel.status.borrow_mut() = status.to_owned();
        kernel
    }

    fn emit(&self, status: &str) {
        *self.status.borrow_mut() = status.to_owned();
        for listener in self.listeners.borrow().iter() {
            listener(status.to_owned());
        }
    }
}

impl KernelConnection for StubKernel {
    fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn on_status_changed(&self, callback: Box<dyn Fn(String)>) {
        self.listeners.borrow_mut().push(callback);
    }
}

struct StubHandle {
    kernel: StubKernel,
    /// Number of polls before the kernel shows up; `None` never attaches.
    attach_after: Option<u32>,
    polls: Rc<Cell<u32>>,
}

impl KernelHandle for StubHandle {
    type Connection = StubKernel;

    fn kernel(&self) -> Option<StubKernel> {
        self.polls.set(self.polls.get() + 1);
        match self.attach_after {
            Some(n) if self.polls.get() >= n => Some(self.kernel.clone()),
            _ => None,
        }
    }
}

struct StubBootstrap {
    fail: Option<BridgeError>,
    kernel: StubKernel,
    attach_after: Option<u32>,
    polls: Rc<Cell<u32>>,
    seen_config: RefCell<Option<BootstrapConfig>>,
}

impl StubBootstrap {
    fn attaching(kernel: StubKernel, attach_after: Option<u32>) -> Self {
        Self { fail: None, kernel, attach_after, polls: Rc::default(), seen_config: RefCell::default() }
    }

    fn failing(err: BridgeError) -> Self {
        Self { fail: Some(err), ..Self::attaching(StubKernel::default(), None) }
    }
}

impl KernelBootstrap for StubBootstrap {
    type Handle = StubHandle;

    async fn bootstrap(&self, config: &BootstrapConfig) -> Result<StubHandle, BridgeError> {
        *self.seen_config.borrow_mut() = Some(config.clone());
        if let Some(err) = self.fail.clone() {
            return Err(err);
        }
        Ok(StubHandle { kernel: self.kernel.clone(), attach_after: self.attach_after, polls: Rc::clone(&self.polls) })
    }
}

fn config() -> BootstrapConfig {
    let (_, settings) = resolve_server_settings(Some("http://h:8888"), "http://origin");
    BootstrapConfig::new(settings, "python3")
}

fn policy(max_attempts: u32) -> PollPolicy {
    PollPolicy { interval: Duration::from_millis(200), max_attempts }
}

fn recorder() -> (Rc<RefCell<Vec<KernelStatus>>>, impl Fn(KernelStatus) + Clone + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |status| sink.borrow_mut().push(status))
}

fn no_wait(_: Duration) -> std::future::Ready<()> {
    std::future::ready(())
}

// =============================================================
// Success paths
// =============================================================

#[test]
fn idle_kernel_is_ready_immediately() {
    let bootstrap = StubBootstrap::attaching(StubKernel::with_status("idle"), Some(1));
    let (seen, report) = recorder();
    let result = block_on(activate(&bootstrap, &config(), policy(150), no_wait, || true, report));
    assert_eq!(result, Ok(()));
    assert_eq!(*seen.borrow(), [KernelStatus::Connecting, KernelStatus::Connecting, KernelStatus::Ready]);
}

#[test]
fn starting_kernel_becomes_ready_on_status_change() {
    let kernel = StubKernel::with_status("starting");
    let bootstrap = StubBootstrap::attaching(kernel.clone(), Some(3));
    let (seen, report) = recorder();
    block_on(activate(&bootstrap, &config(), policy(150), no_wait, || true, report)).unwrap();
    assert_eq!(seen.borrow().last(), Some(&KernelStatus::Connecting));
    assert_eq!(bootstrap.polls.get(), 3);

    kernel.emit("busy");
    assert_eq!(seen.borrow().last(), Some(&KernelStatus::Connecting));
    kernel.emit("idle");
    assert_eq!(seen.borrow().last(), Some(&KernelStatus::Ready));
}

#[test]
fn bootstrap_receives_resolved_settings() {
    let bootstrap = StubBootstrap::attaching(StubKernel::with_status("idle"), Some(1));
    let (_, report) = recorder();
    block_on(activate(&bootstrap, &config(), policy(1), no_wait, || true, report)).unwrap();
    let seen = bootstrap.seen_config.borrow();
    let seen = seen.as_ref().unwrap();
    assert_eq!(seen.server_settings.ws_url, "ws://h:8888");
    assert_eq!(seen.selector, notebook::kernel::EXECUTABLE_SELECTOR);
}

// =============================================================
// Failure paths
// =============================================================

#[test]
fn missing_library_reports_error() {
    let bootstrap = StubBootstrap::failing(BridgeError::Unavailable);
    let (seen, report) = recorder();
    let result = block_on(activate(&bootstrap, &config(), policy(150), no_wait, || true, report));
    assert_eq!(result, Err(BridgeError::Unavailable));
    assert_eq!(*seen.borrow(), [KernelStatus::Connecting, KernelStatus::Error]);
    assert_eq!(bootstrap.polls.get(), 0);
}

#[test]
fn kernel_never_attaching_times_out_after_budget() {
    let bootstrap = StubBootstrap::attaching(StubKernel::with_status("idle"), None);
    let (seen, report) = recorder();
    let sleeps = Rc::new(Cell::new(0_u32));
    let counted = Rc::clone(&sleeps);
    let sleep = move |_: Duration| {
        counted.set(counted.get() + 1);
        std::future::ready(())
    };
    let result = block_on(activate(&bootstrap, &config(), policy(5), sleep, || true, report));
    assert_eq!(result, Err(BridgeError::Timeout { attempts: 5 }));
    assert_eq!(bootstrap.polls.get(), 5);
    assert_eq!(sleeps.get(), 5);
    assert_eq!(seen.borrow().last(), Some(&KernelStatus::Error));
}

#[test]
fn kernel_attaching_on_last_attempt_is_accepted() {
    let bootstrap = StubBootstrap::attaching(StubKernel::with_status("ready"), Some(5));
    let (seen, report) = recorder();
    assert!(block_on(activate(&bootstrap, &config(), policy(5), no_wait, || true, report)).is_ok());
    assert_eq!(seen.borrow().last(), Some(&KernelStatus::Ready));
}

#[test]
fn polling_stops_once_viewer_is_gone() {
    let bootstrap = StubBootstrap::attaching(StubKernel::with_status("idle"), None);
    let (seen, report) = recorder();
    let checks = Rc::new(Cell::new(0_u32));
    let counted = Rc::clone(&checks);
    let alive = move || {
        counted.set(counted.get() + 1);
        counted.get() <= 3
    };
    let result = block_on(activate(&bootstrap, &config(), policy(150), no_wait, alive, report));
    assert_eq!(result, Err(BridgeError::Cancelled));
    assert_eq!(bootstrap.polls.get(), 3);
    assert_eq!(*seen.borrow(), [KernelStatus::Connecting, KernelStatus::Connecting]);
}

#[test]
fn only_bootstrap_failures_allow_retry() {
    assert!(BridgeError::Unavailable.allows_retry());
    assert!(BridgeError::Bootstrap("bad options".to_owned()).allows_retry());
    assert!(!BridgeError::Timeout { attempts: 150 }.allows_retry());
    assert!(!BridgeError::Cancelled.allows_retry());
}

#[test]
fn error_messages_describe_cause() {
    assert_eq!(BridgeError::Unavailable.to_string(), "kernel bootstrap library is not loaded");
    assert_eq!(BridgeError::Timeout { attempts: 150 }.to_string(), "kernel did not attach after 150 attempts");
}
