//! Notebook document renderer with optional live execution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer fetches the `.ipynb` next to the configured document location,
//! renders its cells, and on request hands the code blocks to the kernel
//! bridge. Its parent drives navigation through a `CellNavigator` handle
//! instead of reaching into the rendered DOM itself.
//!
//! ERROR HANDLING
//! ==============
//! Load failures replace the document with an error view; kernel failures
//! only change the status badge. Neither is retried automatically.

use leptos::html;
use leptos::prelude::*;
use notebook::document::{hosted_notebook_url, ipynb_location};

use crate::components::kernel_status::KernelStatusBadge;
use crate::consts::COLAB_URL_TEMPLATE;
use crate::state::viewer::{DocumentState, KernelState, LoadState};
use crate::util::cells::{CellBlock, RenderedCell, execution_label};
#[cfg(feature = "hydrate")]
use crate::util::{dom::DomSurface, highlight::Highlighter};

/// Handle the parent uses to move the reader to a rendered cell.
///
/// Owns the rendered container and the highlight lifecycle; unmounting
/// cancels a pending highlight timer.
#[derive(Clone, Copy)]
pub struct CellNavigator {
    container: NodeRef<html::Div>,
    #[cfg(feature = "hydrate")]
    highlight: StoredValue<Highlighter<DomSurface>, LocalStorage>,
}

impl CellNavigator {
    /// Create a navigator tied to the current reactive owner.
    pub fn new() -> Self {
        let container = NodeRef::new();
        let navigator = Self {
            container,
            #[cfg(feature = "hydrate")]
            highlight: StoredValue::new_local(Highlighter::new(DomSurface::new(container))),
        };
        #[cfg(feature = "hydrate")]
        on_cleanup(move || {
            let _ = navigator.highlight.try_update_value(Highlighter::clear);
        });
        navigator
    }

    pub fn container(&self) -> NodeRef<html::Div> {
        self.container
    }

    /// Scroll to `cell_id` and highlight it for a short moment.
    ///
    /// Returns `false` (after logging) when no such cell is rendered; the
    /// page is left untouched in that case.
    pub fn scroll_to_cell(&self, cell_id: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.highlight.try_update_value(|h| h.navigate(cell_id)).unwrap_or(false)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::warn!("navigation to {cell_id} requested outside the browser");
            false
        }
    }
}

impl Default for CellNavigator {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotebookViewer(
    #[prop(into)] notebook_url: Signal<String>,
    #[prop(into)] kernel_url: Signal<Option<String>>,
    navigator: CellNavigator,
    /// Extra controls rendered at the start of the control bar.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let document = RwSignal::new(DocumentState::default());
    let kernel = RwSignal::new(KernelState::default());

    Effect::new(move || {
        let location = ipynb_location(&notebook_url.get());
        document.update(|d| d.begin(&location));
        kernel.set(KernelState::default());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_document(&location).await;
            if let Err(err) = &result {
                log::error!("{location}: {err}");
            }
            if document.try_update(|d| d.finish(&location, result)) == Some(false) {
                log::debug!("dropped stale load of {location}");
            }
        });
    });

    // Run controls follow the kernel status. The library injects them during
    // bootstrap, which reports `Connecting` again so they get disabled.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let enabled = kernel.get().status.controls_enabled();
        if let Some(container) = navigator.container().get() {
            let updated = crate::util::dom::set_run_controls_enabled(&container, enabled);
            log::debug!("run controls enabled={enabled} ({updated} updated)");
        }
    });

    let on_activate = move |_| {
        if kernel.try_update(KernelState::begin) != Some(true) {
            return;
        }
        start_kernel(kernel, kernel_url.get_untracked());
    };

    let colab_href = move || hosted_notebook_url(COLAB_URL_TEMPLATE, &ipynb_location(&notebook_url.get()));

    view! {
        <div class="notebook-viewer">
            <div class="notebook-viewer__controls">
                {children.map(|c| c())}
                <span class="notebook-viewer__spacer"></span>
                <KernelStatusBadge status=Signal::derive(move || kernel.get().status) />
                <Show when=move || !kernel.get().active>
                    <button class="btn btn--primary notebook-viewer__activate" on:click=on_activate>
                        "Activate Live Code"
                    </button>
                </Show>
                <a class="btn notebook-viewer__colab" href=colab_href target="_blank" rel="noopener noreferrer">
                    "Open in Colab"
                </a>
            </div>
            <div class="notebook-viewer__document" node_ref=navigator.container()>
                {move || match document.with(|d| d.load.clone()) {
                    LoadState::Loading => {
                        view! {
                            <div class="notebook-viewer__loading">
                                <span class="spinner" aria-hidden="true"></span>
                                <p>"Loading notebook..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    LoadState::Failed(message) => {
                        view! {
                            <div class="notebook-viewer__error" role="alert">
                                <h3>"Error Loading Notebook"</h3>
                                <p>{message}</p>
                            </div>
                        }
                            .into_any()
                    }
                    LoadState::Ready(cells) => cells.into_iter().map(cell_view).collect_view().into_any(),
                }}
            </div>
        </div>
    }
}

fn cell_view(cell: RenderedCell) -> AnyView {
    let class = format!("cell {}", cell.kind_class());
    match cell.block {
        CellBlock::Code { source, execution_count } => view! {
            <div class=class data-cell-id=cell.id>
                <div class="cell__header">
                    <span class="cell__prompt">{execution_label(execution_count)}</span>
                </div>
                <pre class="cell__source" data-executable="true" data-language="python">{source}</pre>
            </div>
        }
        .into_any(),
        CellBlock::Narrative { html } => view! {
            <div class=class data-cell-id=cell.id>
                <div class="cell__markdown" inner_html=html></div>
            </div>
        }
        .into_any(),
        CellBlock::Plain { text } => view! {
            <div class=class data-cell-id=cell.id>
                <pre class="cell__raw">{text}</pre>
            </div>
        }
        .into_any(),
    }
}

/// Resolve the backend and run one activation in the background.
fn start_kernel(kernel: RwSignal<KernelState>, kernel_url: Option<String>) {
    #[cfg(feature = "hydrate")]
    {
        use notebook::kernel::{DEFAULT_KERNEL_NAME, resolve_server_settings};
        use notebook::{BootstrapConfig, KernelStatus, PollPolicy};

        use crate::bridge::{self, thebe::ThebeBootstrap};

        let report = move |status: KernelStatus| {
            let _ = kernel.try_update(|k| k.set_status(status));
        };
        let origin = web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default();
        let (mode, settings) = resolve_server_settings(kernel_url.as_deref(), &origin);
        log::info!("kernel backend mode={mode:?}");
        let config = BootstrapConfig::new(settings, DEFAULT_KERNEL_NAME);

        let alive = move || kernel.try_get_untracked().is_some();

        leptos::task::spawn_local(async move {
            let result = match ThebeBootstrap::from_window() {
                Ok(bootstrap) => {
                    let policy = PollPolicy::default();
                    bridge::activate(&bootstrap, &config, policy, gloo_timers::future::sleep, alive, report).await
                }
                Err(err) => {
                    log::error!("{err}");
                    report(KernelStatus::Error);
                    Err(err)
                }
            };
            // Failures were already reported through `report`.
            if let Err(err) = result
                && err.allows_retry()
            {
                let _ = kernel.try_update(KernelState::release);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kernel, kernel_url);
    }
}
