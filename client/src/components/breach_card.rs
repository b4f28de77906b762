//! Collapsible card listing every breach for one monitored email.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::DashboardContext;
use crate::net::types::BreachRecord;
use crate::state::breaches::{LabeledGroup, NO_DATA_CLASSES_MESSAGE, chevron_class, verification_label};
use crate::util::format::local_date;

/// One card per email. Expansion is independent per card; the chevron
/// follows the expanded flag.
#[component]
pub fn BreachCard(group: LabeledGroup) -> impl IntoView {
    let breaches = DashboardContext::expect().breaches;
    let email_id = group.email_id;
    let count_label = group.count_label();

    let expanded = Memo::new(move |_| breaches.with(|s| s.is_expanded(email_id)));
    let on_toggle = move |_| {
        breaches.update(|s| {
            s.toggle(email_id);
        });
    };

    view! {
        <div class="breach-card">
            <div class="breach-card-header" on:click=on_toggle>
                <div class="d-flex justify-content-between align-items-center">
                    <div>
                        <strong>{group.label}</strong>
                        <span class="text-muted ms-2">"(" {count_label} ")"</span>
                    </div>
                    <i
                        id=format!("chevron-{email_id}")
                        class=move || format!("bi {}", chevron_class(expanded.get()))
                    ></i>
                </div>
            </div>
            <div
                id=format!("breaches-{email_id}")
                class="breach-card-body collapse"
                class:show=move || expanded.get()
            >
                {group
                    .breaches
                    .into_iter()
                    .map(|breach| view! { <BreachItem breach=breach/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BreachItem(breach: BreachRecord) -> impl IntoView {
    let (status_class, status_text) = verification_label(breach.is_verified);
    let title = breach.display_title().to_owned();
    let description = breach.display_description().map(str::to_owned);
    let date = local_date(&breach.breach_date);
    let data_classes = breach.data_classes().to_vec();

    view! {
        <div class="breach-item">
            <div class="breach-header">
                <div class="flex-grow-1">
                    <div class="breach-title">{title}</div>
                    <div class="breach-date">"Breach Date: " {date}</div>
                </div>
                <span class=format!("breach-status {status_class}")>{status_text}</span>
            </div>
            {description.map(|text| view! { <div class="breach-description">{text}</div> })}
            <div class="data-classes">
                <strong>"Compromised Data:"</strong>
                <br/>
                <div class="mt-1">
                    {if data_classes.is_empty() {
                        view! { <span class="text-muted">{NO_DATA_CLASSES_MESSAGE}</span> }.into_any()
                    } else {
                        data_classes
                            .into_iter()
                            .map(|class| view! { <span class="data-class-tag">{class}</span> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
