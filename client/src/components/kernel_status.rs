//! Kernel connection indicator for the viewer control bar.

use leptos::prelude::*;
use notebook::KernelStatus;

use crate::state::viewer::kernel_status_class;

#[component]
pub fn KernelStatusBadge(#[prop(into)] status: Signal<KernelStatus>) -> impl IntoView {
    view! {
        <span class="kernel-status" title="Kernel status">
            <span class=move || format!("kernel-status__dot {}", kernel_status_class(status.get()))></span>
            <span class="kernel-status__label">{move || status.get().label()}</span>
        </span>
    }
}
