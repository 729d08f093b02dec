//! Route boundary components.
//!
//! `RequireAuth` gates protected content and redirects to the login
//! boundary when the session is gone; `RedirectIfAuthed` keeps
//! signed-in users off the public auth pages. Both re-validate the
//! stored token, not just the cached flag.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::claims::now_seconds;
use crate::auth::store::TokenStore;
use crate::state::session::{self, SessionState};

/// Wrapper for routes that require an authenticated session.
///
/// The session signal drives reactivity; on every transition the token
/// store is re-validated so a stale flag can never keep a protected
/// view alive.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<TokenStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        let authenticated = session.get().authenticated;
        if !authenticated || !session::is_authenticated(&store, now_seconds()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.get().authenticated>
            {children()}
        </Show>
    }
}

/// Wrapper for the public auth pages; an already-authenticated user is
/// sent to the dashboard instead.
#[component]
pub fn RedirectIfAuthed(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<TokenStore>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().authenticated && session::is_authenticated(&store, now_seconds()) {
            navigate("/", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || !session.get().authenticated>
            {children()}
        </Show>
    }
}
