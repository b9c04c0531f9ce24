//! Home link plus current notebook title.

use leptos::prelude::*;

#[component]
pub fn Breadcrumbs(title: String) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <a class="breadcrumbs__link" href="/">"Home"</a>
            <span class="breadcrumbs__sep" aria-hidden="true">"/"</span>
            <span class="breadcrumbs__current">{title}</span>
        </nav>
    }
}
