//! Top header: brand, sidebar toggle, theme toggle, current user, and
//! sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::roles::display_role;
use crate::auth::store::TokenStore;
use crate::net::auth_client;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::theme;

/// Console header shown on every protected route.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<TokenStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let user_name = move || {
        session
            .get()
            .current_user
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    // Role badges carry the presentation form only; evaluation always
    // uses the full identifier.
    let role_badges = move || {
        session
            .get()
            .current_user
            .map(|u| u.roles.iter().map(|r| display_role(r).to_owned()).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    let on_toggle_sidebar = move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);

    let on_toggle_theme = move |_| ui.update(|u| u.theme = theme::toggle(u.theme));

    let on_logout = move |_| {
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            auth_client::logout(session, store).await;
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <header class="header">
            <button class="header__menu-toggle" on:click=on_toggle_sidebar aria-label="Toggle sidebar">
                "☰"
            </button>
            <span class="header__brand">"Warden"</span>
            <span class="header__subtitle">"Access Management Console"</span>
            <span class="header__spacer"></span>
            <button class="header__theme-toggle" on:click=on_toggle_theme aria-label="Toggle theme">
                {move || if ui.get().theme.is_dark() { "Light" } else { "Dark" }}
            </button>
            <div class="header__user">
                <span class="header__user-name">{user_name}</span>
                <span class="header__user-roles">
                    {move || {
                        role_badges()
                            .into_iter()
                            .map(|role| view! { <span class="badge badge--role">{role}</span> })
                            .collect::<Vec<_>>()
                    }}
                </span>
                <button class="header__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
