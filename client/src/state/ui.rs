//! Local UI chrome state (theme, outline panel visibility and width).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of document state so layout
//! controls can evolve independently of what is being viewed.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const DEFAULT_PANEL_WIDTH: f64 = 300.0;
pub const MIN_PANEL_WIDTH: f64 = 200.0;
pub const MAX_PANEL_WIDTH: f64 = 600.0;

/// App-wide UI preferences provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

/// Outline panel layout owned by the viewer shell.
///
/// Width only changes while a divider drag is in progress and always stays
/// inside `[min_width, max_width]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelLayout {
    pub open: bool,
    pub width: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub resizing: bool,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            open: true,
            width: DEFAULT_PANEL_WIDTH,
            min_width: MIN_PANEL_WIDTH,
            max_width: MAX_PANEL_WIDTH,
            resizing: false,
        }
    }
}

impl PanelLayout {
    #[must_use]
    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        if !self.open {
            self.resizing = false;
        }
    }

    pub fn begin_resize(&mut self) {
        if self.open {
            self.resizing = true;
        }
    }

    /// Follow the pointer while resizing. Returns whether the width changed.
    pub fn resize_to(&mut self, pointer_x: f64) -> bool {
        if !self.resizing {
            return false;
        }
        let next = self.clamp(pointer_x);
        if (next - self.width).abs() < f64::EPSILON {
            return false;
        }
        self.width = next;
        true
    }

    pub fn end_resize(&mut self) {
        self.resizing = false;
    }

    /// `display` of the outline sidebar. Closing hides the panel without
    /// unmounting it, so its fold state and selection survive a reopen.
    #[must_use]
    pub fn sidebar_display(&self) -> &'static str {
        if self.open { "block" } else { "none" }
    }

    /// Width the panel occupies on screen (0 when closed).
    #[must_use]
    pub fn rendered_width(&self) -> f64 {
        if self.open { self.width } else { 0.0 }
    }
}
