//! Render plan for notebook cells.
//!
//! ARCHITECTURE
//! ============
//! Documents are converted once, when a load completes, into one
//! `RenderedCell` per input cell. Views only map these blocks to markup, so
//! markdown is never re-parsed on re-render and the rendered cell count
//! always equals the document's cell count.

#[cfg(test)]
#[path = "cells_test.rs"]
mod cells_test;

use notebook::{CellKind, Document};

use crate::util::markdown::render_markdown_html;

/// Presentation of one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellBlock {
    /// Executable source, kept as plain text so the bootstrap library can
    /// find and replace it.
    Code { source: String, execution_count: Option<u32> },
    /// Narrative markdown converted to HTML.
    Narrative { html: String },
    /// Raw or unknown cells, shown verbatim.
    Plain { text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCell {
    /// Navigation anchor (`data-cell-id`).
    pub id: String,
    pub block: CellBlock,
}

impl RenderedCell {
    /// Modifier class for the cell wrapper.
    #[must_use]
    pub fn kind_class(&self) -> &'static str {
        match self.block {
            CellBlock::Code { .. } => "cell--code",
            CellBlock::Narrative { .. } => "cell--markdown",
            CellBlock::Plain { .. } => "cell--raw",
        }
    }
}

/// Convert every cell of `document`, in order.
pub fn render_cells(document: &Document) -> Vec<RenderedCell> {
    document
        .cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let source = cell.source.text();
            let block = match cell.kind {
                CellKind::Code => {
                    CellBlock::Code { source: source.into_owned(), execution_count: cell.execution_count }
                }
                CellKind::Markdown => CellBlock::Narrative { html: render_markdown_html(&source) },
                CellKind::Raw | CellKind::Other => CellBlock::Plain { text: source.into_owned() },
            };
            RenderedCell { id: cell.resolved_id(index), block }
        })
        .collect()
}

/// Prompt shown in a code cell header: `In [3]`, or `In [ ]` when never run.
pub fn execution_label(execution_count: Option<u32>) -> String {
    match execution_count {
        Some(count) => format!("In [{count}]"),
        None => "In [ ]".to_owned(),
    }
}

/// CSS selector matching the wrapper of `cell_id`.
pub fn cell_selector(cell_id: &str) -> String {
    let mut escaped = String::with_capacity(cell_id.len());
    for ch in cell_id.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("[data-cell-id=\"{escaped}\"]")
}
