//! Outline panel selection and fold state.
//!
//! Sections are addressed by their index path from the root (`[2]` is the
//! third top-level section, `[2, 0]` its first child) because names and cell
//! ids repeat inside one outline.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use std::collections::BTreeSet;

use notebook::Section;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineState {
    /// Paths of folded sections. Everything else is expanded.
    collapsed: BTreeSet<Vec<usize>>,
    active: Option<Vec<usize>>,
}

impl OutlineState {
    #[must_use]
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        !self.collapsed.contains(path)
    }

    /// Flip one section's fold state. Other sections are untouched.
    pub fn toggle(&mut self, path: &[usize]) {
        if !self.collapsed.remove(path) {
            self.collapsed.insert(path.to_vec());
        }
    }

    #[must_use]
    pub fn is_active(&self, path: &[usize]) -> bool {
        self.active.as_deref() == Some(path)
    }

    /// Handle a click on the section at `path`.
    ///
    /// A section with a target cell becomes the single active selection and
    /// its cell id is returned for navigation. A section without one only
    /// folds or unfolds, and only when it has children.
    pub fn select(&mut self, path: &[usize], section: &Section) -> Option<String> {
        match section.cell_id.as_deref() {
            Some(cell_id) => {
                self.active = Some(path.to_vec());
                Some(cell_id.to_owned())
            }
            None => {
                if section.has_subsections() {
                    self.toggle(path);
                }
                None
            }
        }
    }
}
