//! Placeholder page for console sections routed from the sidebar.

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>{title}</h1>
            <p class="section-page__empty">"Nothing to show here yet."</p>
        </div>
    }
}
