//! Application header: title, current assignment, repository link and theme
//! toggle.

use leptos::prelude::*;

use crate::consts::{APP_TITLE, REPOSITORY_URL};
use crate::state::ui::UiState;

#[component]
pub fn TopNav(#[prop(optional)] current: Option<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="top-nav">
            <a class="top-nav__title" href="/">{APP_TITLE}</a>
            {current.map(|title| view! { <span class="top-nav__current">{title}</span> })}
            <span class="top-nav__spacer"></span>
            <button
                class="btn top-nav__theme"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
            <a class="top-nav__repo" href=REPOSITORY_URL target="_blank" rel="noopener noreferrer">
                "GitHub"
            </a>
        </header>
    }
}
