//! DOM helpers for cell navigation and run-control state.
//!
//! Browser-only operations are compiled under `hydrate`; the small pure
//! pieces (selectors, style values) are shared so they can be tested.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Class added to a cell while it is the navigation target.
pub const HIGHLIGHT_CLASS: &str = "cell-highlight";

/// Buttons injected by the execution library next to each code block.
pub const RUN_CONTROL_SELECTOR: &str = ".thebelab-button, .thebelab-run-button, .thebelab-restart-button";

/// Inline `opacity` and `cursor` for run controls.
pub fn run_control_style(enabled: bool) -> (&'static str, &'static str) {
    if enabled { ("1", "pointer") } else { ("0.5", "not-allowed") }
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use std::time::Duration;

    use gloo_timers::callback::Timeout;
    use leptos::html;
    use leptos::prelude::{GetUntracked, NodeRef};
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::{HIGHLIGHT_CLASS, RUN_CONTROL_SELECTOR, run_control_style};
    use crate::util::cells::cell_selector;
    use crate::util::highlight::HighlightSurface;

    /// Rendered cell `cell_id` inside `container`, if any.
    pub fn find_cell(container: &Element, cell_id: &str) -> Option<Element> {
        container.query_selector(&cell_selector(cell_id)).ok().flatten()
    }

    /// Smooth-scroll `element` to the top of its scroll container.
    pub fn scroll_to(element: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    pub fn set_highlight(element: &Element, on: bool) {
        let classes = element.class_list();
        let result = if on { classes.add_1(HIGHLIGHT_CLASS) } else { classes.remove_1(HIGHLIGHT_CLASS) };
        if result.is_err() {
            log::warn!("could not update {HIGHLIGHT_CLASS}");
        }
    }

    /// The rendered document as a [`HighlightSurface`], with gloo timers.
    pub struct DomSurface {
        container: NodeRef<html::Div>,
    }

    impl DomSurface {
        pub fn new(container: NodeRef<html::Div>) -> Self {
            Self { container }
        }
    }

    impl HighlightSurface for DomSurface {
        type Target = Element;
        type Timer = Timeout;

        fn find(&self, cell_id: &str) -> Option<Element> {
            let Some(container) = self.container.get_untracked() else {
                log::debug!("navigation to {cell_id} before the document rendered");
                return None;
            };
            find_cell(&container, cell_id)
        }

        fn scroll_to(&self, target: &Element) {
            scroll_to(target);
        }

        fn set_highlight(&self, target: &Element, on: bool) {
            set_highlight(target, on);
        }

        fn schedule_clear(&self, target: Element, after: Duration) -> Timeout {
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || set_highlight(&target, false))
        }

        fn cancel(&self, timer: Timeout) {
            timer.cancel();
        }
    }

    /// Enable or disable every run control under `container`.
    ///
    /// Returns how many controls were updated. Controls appear only after
    /// the library converts the page, so zero is normal before activation.
    pub fn set_run_controls_enabled(container: &Element, enabled: bool) -> u32 {
        let Ok(controls) = container.query_selector_all(RUN_CONTROL_SELECTOR) else {
            return 0;
        };
        let (opacity, cursor) = run_control_style(enabled);
        let mut updated = 0;
        for index in 0..controls.length() {
            let Some(control) = controls.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let toggled = if enabled {
                control.remove_attribute("disabled")
            } else {
                control.set_attribute("disabled", "true")
            };
            let style = control.style();
            if toggled.is_ok()
                && style.set_property("opacity", opacity).is_ok()
                && style.set_property("cursor", cursor).is_ok()
            {
                updated += 1;
            }
        }
        updated
    }
}
