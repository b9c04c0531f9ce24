//! Catalog page listing every assignment.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use notebook::Catalog;

use crate::components::catalog_card::CatalogCard;
use crate::components::top_nav::TopNav;

pub const EMPTY_CATALOG_MESSAGE: &str = "No assignments available yet.";

/// Badge text for an assignment's position in the course.
pub fn week_label(week: u32) -> String {
    format!("Week {week}")
}

/// Route of the viewer for `slug`.
pub fn viewer_href(slug: &str) -> String {
    format!("/{slug}")
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let summaries = Catalog::builtin().summaries();

    view! {
        <div class="catalog-page">
            <TopNav />
            <main class="catalog-page__content">
                <h1 class="catalog-page__heading">"Assignments"</h1>
                <p class="catalog-page__intro">
                    "Browse course notebooks, jump between sections and run the code live."
                </p>
                {if summaries.is_empty() {
                    view! { <p class="catalog-page__empty">{EMPTY_CATALOG_MESSAGE}</p> }.into_any()
                } else {
                    view! {
                        <div class="catalog-page__grid">
                            {summaries
                                .into_iter()
                                .map(|summary| view! { <CatalogCard summary=summary /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </main>
        </div>
    }
}
