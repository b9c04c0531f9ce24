//! Viewer route: outline panel and notebook side by side.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/:slug` resolves against the compiled-in catalog. An unknown slug renders
//! a not-found view and never starts a document fetch; a known one mounts
//! the shell, which owns the panel layout and forwards outline clicks to the
//! renderer's `CellNavigator`.
//!
//! DESIGN
//! ======
//! The shell is rebuilt whenever the slug changes, so panel width, outline
//! selection and kernel state never leak from one notebook to the next.
//! Closing the outline only hides it, so fold state and the active section
//! survive a reopen. Divider drags use window-level pointer listeners that
//! exist only while a drag is in progress.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use notebook::{Catalog, CatalogEntry};

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::notebook_viewer::{CellNavigator, NotebookViewer};
use crate::components::outline_panel::OutlinePanel;
use crate::components::top_nav::TopNav;
use crate::state::ui::PanelLayout;

/// What `/:slug` shows.
#[derive(Debug, PartialEq, Eq)]
pub enum ViewerRoute<'a> {
    Found(&'a CatalogEntry),
    NotFound,
}

pub fn viewer_route<'a>(catalog: &'a Catalog, slug: Option<&str>) -> ViewerRoute<'a> {
    slug.and_then(|slug| catalog.get(slug)).map_or(ViewerRoute::NotFound, ViewerRoute::Found)
}

/// Label of the outline toggle button.
pub fn panel_toggle_title(open: bool) -> &'static str {
    if open { "Hide outline" } else { "Show outline" }
}

#[component]
pub fn ViewerPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("slug"));

    move || match viewer_route(Catalog::builtin(), slug.get().as_deref()) {
        ViewerRoute::Found(entry) => view! { <Shell entry=entry.clone() /> }.into_any(),
        ViewerRoute::NotFound => {
            let requested = slug.get_untracked().unwrap_or_default();
            log::warn!("no catalog entry for {requested:?}");
            view! { <NotFound slug=requested /> }.into_any()
        }
    }
}

#[component]
fn NotFound(slug: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <TopNav />
            <main class="not-found__content">
                <h1>"Assignment Not Found"</h1>
                <p>"There is no assignment called " <code>{slug}</code> "."</p>
                <a class="btn btn--primary" href="/">"Back to assignments"</a>
            </main>
        </div>
    }
}

#[component]
fn Shell(entry: CatalogEntry) -> impl IntoView {
    let layout = RwSignal::new(PanelLayout::default());
    let navigator = CellNavigator::new();
    let on_navigate = Callback::new(move |cell_id: String| {
        navigator.scroll_to_cell(&cell_id);
    });

    #[cfg(feature = "hydrate")]
    let drag = DragListeners::new(layout);

    let on_divider_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        layout.update(PanelLayout::begin_resize);
        #[cfg(feature = "hydrate")]
        if layout.get_untracked().resizing {
            drag.attach();
        }
    };
    let on_toggle = move |_| {
        layout.update(PanelLayout::toggle_open);
        #[cfg(feature = "hydrate")]
        drag.detach();
    };

    let title = entry.title.clone();
    let outline = entry.outline.clone();

    view! {
        <div class="viewer-shell" class:viewer-shell--resizing=move || layout.get().resizing>
            <TopNav current=entry.title.clone() />
            <div class="viewer-shell__body">
                <aside
                    class="viewer-shell__sidebar"
                    class:viewer-shell__sidebar--closed=move || !layout.get().open
                    style:width=move || format!("{}px", layout.get().rendered_width())
                    style:display=move || layout.get().sidebar_display()
                    aria-hidden=move || (!layout.get().open).to_string()
                >
                    <OutlinePanel outline=outline on_navigate=on_navigate />
                </aside>
                <Show when=move || layout.get().open>
                    <div
                        class="viewer-shell__divider"
                        class:viewer-shell__divider--active=move || layout.get().resizing
                        role="separator"
                        aria-orientation="vertical"
                        on:pointerdown=on_divider_down
                    ></div>
                </Show>
                <main class="viewer-shell__main">
                    <NotebookViewer
                        notebook_url=entry.notebook_url.clone()
                        kernel_url=entry.kernel_url.clone()
                        navigator=navigator
                    >
                        <button
                            class="btn viewer-shell__toggle"
                            on:click=on_toggle
                            title=move || panel_toggle_title(layout.get().open)
                        >
                            "☰"
                        </button>
                        <Breadcrumbs title=title />
                    </NotebookViewer>
                </main>
            </div>
        </div>
    }
}

/// Window-level pointer listeners alive for the duration of one drag.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct DragListeners {
    layout: RwSignal<PanelLayout>,
    handles: StoredValue<Vec<WindowListenerHandle>, LocalStorage>,
}

#[cfg(feature = "hydrate")]
impl DragListeners {
    fn new(layout: RwSignal<PanelLayout>) -> Self {
        let drag = Self { layout, handles: StoredValue::new_local(Vec::new()) };
        on_cleanup(move || drag.detach());
        drag
    }

    fn attach(self) {
        self.detach();
        let layout = self.layout;
        let on_move = window_event_listener(leptos::ev::pointermove, move |ev| {
            layout.maybe_update(|l| l.resize_to(f64::from(ev.client_x())));
        });
        let on_up = window_event_listener(leptos::ev::pointerup, move |_| {
            layout.update(PanelLayout::end_resize);
            self.detach();
        });
        self.handles.update_value(|handles| handles.extend([on_move, on_up]));
    }

    fn detach(self) {
        let released = self.handles.try_update_value(std::mem::take).unwrap_or_default();
        for handle in released {
            handle.remove();
        }
    }
}
