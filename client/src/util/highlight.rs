//! Navigation highlight lifecycle.
//!
//! At most one cell is highlighted. A navigation scrolls to the target, marks
//! it, and schedules the mark's removal after `HIGHLIGHT_DURATION`. A newer
//! navigation clears the previous mark first and cancels its timer, as does
//! unmounting. An unknown cell id leaves the page untouched.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use std::time::Duration;

use crate::consts::HIGHLIGHT_DURATION;

/// Where highlights are drawn: the rendered document plus a timer source.
pub trait HighlightSurface {
    type Target: Clone;
    type Timer;

    /// Rendered cell `cell_id`, if present.
    fn find(&self, cell_id: &str) -> Option<Self::Target>;
    fn scroll_to(&self, target: &Self::Target);
    fn set_highlight(&self, target: &Self::Target, on: bool);
    /// Remove the highlight from `target` once `after` has elapsed.
    fn schedule_clear(&self, target: Self::Target, after: Duration) -> Self::Timer;
    fn cancel(&self, timer: Self::Timer);
}

struct Pending<S: HighlightSurface> {
    target: S::Target,
    timer: S::Timer,
}

pub struct Highlighter<S: HighlightSurface> {
    surface: S,
    pending: Option<Pending<S>>,
}

impl<S: HighlightSurface> Highlighter<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, pending: None }
    }

    /// Scroll to `cell_id` and highlight it. Returns `false` when the cell
    /// is not rendered.
    pub fn navigate(&mut self, cell_id: &str) -> bool {
        let Some(target) = self.surface.find(cell_id) else {
            log::warn!("navigation target {cell_id} is not in the document");
            return false;
        };
        self.clear();
        self.surface.scroll_to(&target);
        self.surface.set_highlight(&target, true);
        let timer = self.surface.schedule_clear(target.clone(), HIGHLIGHT_DURATION);
        self.pending = Some(Pending { target, timer });
        true
    }

    /// Drop the current highlight, if any, and cancel its timer.
    ///
    /// The timer may already have fired; removing the mark again is harmless.
    pub fn clear(&mut self) {
        if let Some(previous) = self.pending.take() {
            self.surface.cancel(previous.timer);
            self.surface.set_highlight(&previous.target, false);
        }
    }
}
