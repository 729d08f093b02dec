//! Console footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Warden Access Management Console"</span>
            <span class="footer__spacer"></span>
            <span class="footer__version">"v0.1.0"</span>
        </footer>
    }
}
