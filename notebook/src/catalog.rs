//! Static assignment catalog and outline model.
//!
//! DESIGN
//! ======
//! The catalog is configuration, not data: it is built once at process start
//! and never mutated. Entries keep definition order because the listing page
//! renders them in that order. Slugs are unique; when a definition list
//! repeats a slug the first definition wins and the repeats are recorded so
//! the caller can report them.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Navigation tree shown next to a notebook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub title: String,
    #[serde(alias = "ml_stage", default)]
    pub sections: Vec<Section>,
}

/// One named jump target, optionally with nested sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
    #[serde(alias = "substage", default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    /// Section that jumps to `cell_id` and has no children.
    #[must_use]
    pub fn leaf(name: &str, cell_id: &str) -> Self {
        Self { name: name.to_owned(), cell_id: Some(cell_id.to_owned()), subsections: Vec::new() }
    }

    /// Section that only groups `subsections`.
    #[must_use]
    pub fn group(name: &str, subsections: Vec<Section>) -> Self {
        Self { name: name.to_owned(), cell_id: None, subsections }
    }

    #[must_use]
    pub fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }
}

/// One viewable notebook assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Route segment identifying the entry (`/:slug`).
    pub slug: String,
    /// Stable internal identifier (for example `assignment_1`).
    pub id: String,
    pub title: String,
    pub description: String,
    /// Course week the assignment belongs to; used as the display sequence number.
    pub week: u32,
    /// Document location. An `.html` suffix is mapped to `.ipynb` before fetching.
    pub notebook_url: String,
    /// Absolute kernel backend address. `None` means the page origin proxies the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel_url: Option<String>,
    pub outline: Outline,
}

/// Listing projection of a [`CatalogEntry`] without the outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub week: u32,
}

impl From<&CatalogEntry> for CatalogSummary {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            slug: entry.slug.clone(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            week: entry.week,
        }
    }
}

/// Ordered, slug-unique registry of catalog entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    duplicates: Vec<String>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(crate::builtin::entries()));

impl Catalog {
    /// Build a catalog, keeping the first definition of every slug.
    #[must_use]
    pub fn new(definitions: Vec<CatalogEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(definitions.len());
        let mut duplicates = Vec::new();
        for entry in definitions {
            if seen.insert(entry.slug.clone()) {
                entries.push(entry);
            } else {
                duplicates.push(entry.slug);
            }
        }
        Self { entries, duplicates }
    }

    /// The catalog shipped with the viewer.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Look up an entry by slug. `None` is the normal "not found" outcome.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// All entries in definition order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<CatalogSummary> {
        self.entries.iter().map(CatalogSummary::from).collect()
    }

    /// Slugs whose repeated definitions were dropped while building.
    #[must_use]
    pub fn duplicate_slugs(&self) -> &[String] {
        &self.duplicates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
