//! Shared status alert shown above the dashboard tabs.

use leptos::prelude::*;

use crate::app::DashboardContext;

/// The single alert region. Text is rendered as an escaped text node.
#[component]
pub fn AlertBanner() -> impl IntoView {
    let alert = DashboardContext::expect().alert;

    let class = move || alert.with(|a| format!("alert {} alert-dismissible", a.kind.css_class()));

    view! {
        <div class=class class:d-none=move || !alert.with(|a| a.visible) role="alert">
            {move || alert.with(|a| a.message.clone())}
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| alert.update(|a| a.dismiss())
            ></button>
        </div>
    }
}
