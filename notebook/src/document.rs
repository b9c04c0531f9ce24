//! Notebook (`.ipynb`) document schema.
//!
//! Only the fields the viewer renders are modeled; everything else in the
//! file (metadata, outputs, nbformat) is ignored on parse.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Why a notebook could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The request never produced a response.
    #[error("Failed to load notebook: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("Failed to load notebook: {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The body is not a notebook document.
    #[error("Failed to parse notebook: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fetched notebook: an ordered list of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub cells: Vec<Cell>,
}

impl Document {
    /// Parse a notebook JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when the body is not JSON or has no
    /// `cells` array.
    pub fn parse(body: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Cell kind as written in `cell_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Code,
    Markdown,
    Raw,
    /// Any kind this viewer does not know; rendered as plain text.
    #[serde(other)]
    Other,
}

/// Cell source: a single string or a list of fragments to concatenate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Source {
    /// Full source text with fragments joined.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Lines(lines) => Cow::Owned(lines.concat()),
        }
    }
}

/// One unit of a notebook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "cell_type")]
    pub kind: CellKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub source: Source,
    /// Display-only execution counter for code cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_count: Option<u32>,
}

impl Cell {
    /// Navigation anchor for the cell at `index`: its own id, else `cell-{index}`.
    #[must_use]
    pub fn resolved_id(&self, index: usize) -> String {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => format!("cell-{index}"),
        }
    }
}

/// Map a configured document location to the notebook file to fetch.
///
/// Published locations point at the exported `.html`; the viewer reads the
/// `.ipynb` next to it. Other locations are used unchanged.
#[must_use]
pub fn ipynb_location(location: &str) -> String {
    match location.strip_suffix(".html") {
        Some(stem) => format!("{stem}.ipynb"),
        None => location.to_owned(),
    }
}

/// Fill `{path}` in a hosted-notebook URL template with the `.ipynb` location.
#[must_use]
pub fn hosted_notebook_url(template: &str, location: &str) -> String {
    template.replace("{path}", &ipynb_location(location))
}
