//! Collapsible outline of the open notebook.
//!
//! Every section folds independently and starts expanded. Clicking a
//! section that names a cell selects it and asks the parent to navigate;
//! clicking one that does not only folds it.

use leptos::prelude::*;
use notebook::{Outline, Section};

use crate::state::outline::OutlineState;

#[component]
pub fn OutlinePanel(outline: Outline, on_navigate: Callback<String>) -> impl IntoView {
    let state = RwSignal::new(OutlineState::default());
    let sections = outline
        .sections
        .into_iter()
        .enumerate()
        .map(|(index, section)| section_view(section, vec![index], state, on_navigate))
        .collect_view();

    view! {
        <nav class="outline-panel" aria-label="Notebook outline">
            <h2 class="outline-panel__title">{outline.title}</h2>
            <ul class="outline-panel__list">{sections}</ul>
        </nav>
    }
}

/// One section and, recursively, its children.
fn section_view(
    section: Section,
    path: Vec<usize>,
    state: RwSignal<OutlineState>,
    on_navigate: Callback<String>,
) -> AnyView {
    let depth = path.len();
    let has_children = section.has_subsections();
    let children = section
        .subsections
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, child)| {
            let mut child_path = path.clone();
            child_path.push(index);
            section_view(child, child_path, state, on_navigate)
        })
        .collect_view();

    let name = section.name.clone();
    let path = StoredValue::new(path);
    let section = StoredValue::new(section);
    let expanded = move || path.with_value(|p| state.with(|s| s.is_expanded(p)));
    let active = move || path.with_value(|p| state.with(|s| s.is_active(p)));

    let on_select = move |_| {
        let mut target = None;
        state.update(|s| target = path.with_value(|p| section.with_value(|sec| s.select(p, sec))));
        if let Some(cell_id) = target {
            on_navigate.run(cell_id);
        }
    };
    let on_fold = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        path.with_value(|p| state.update(|s| s.toggle(p)));
    };

    view! {
        <li class="outline-section" class:outline-section--nested={depth > 1}>
            <div class="outline-section__row">
                {has_children
                    .then(|| {
                        view! {
                            <button
                                class="outline-section__fold"
                                on:click=on_fold
                                aria-label=move || if expanded() { "Collapse section" } else { "Expand section" }
                            >
                                {move || if expanded() { "▾" } else { "▸" }}
                            </button>
                        }
                    })}
                <button
                    class="outline-section__label"
                    class:outline-section__label--active=active
                    class:outline-section__label--group=has_children
                    on:click=on_select
                >
                    {name}
                </button>
            </div>
            {has_children
                .then(|| {
                    view! {
                        <ul
                            class="outline-section__children"
                            style:display=move || if expanded() { "block" } else { "none" }
                        >
                            {children}
                        </ul>
                    }
                })}
        </li>
    }
    .into_any()
}
