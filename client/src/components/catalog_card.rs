//! Card for one assignment on the catalog page.

use leptos::prelude::*;
use notebook::CatalogSummary;

use crate::pages::catalog::{viewer_href, week_label};

#[component]
pub fn CatalogCard(summary: CatalogSummary) -> impl IntoView {
    view! {
        <a class="catalog-card" href=viewer_href(&summary.slug)>
            <span class="catalog-card__week">{week_label(summary.week)}</span>
            <h2 class="catalog-card__title">{summary.title}</h2>
            <p class="catalog-card__description">{summary.description}</p>
            <span class="catalog-card__open">"Open notebook →"</span>
        </a>
    }
}
