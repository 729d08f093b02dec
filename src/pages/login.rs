//! Login page: exchanges credentials for a session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::store::TokenStore;
use crate::net::auth_client;
use crate::state::session::SessionState;

/// Credential form. On success the session is committed and the user
/// lands on the dashboard; on rejection the service's message is shown
/// and nothing about the session changes.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<TokenStore>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Username and password are required".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth_client::login(session, store, user, pass).await {
                Ok(()) => {
                    busy.set(false);
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <h1>"Warden"</h1>
                    <p class="login-card__subtitle">"Access Management Console"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__field">
                        <span>"Username"</span>
                        <input
                            type="text"
                            autocomplete="username"
                            placeholder="Enter your username"
                            prop:value=username
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="login-form__field">
                        <span>"Password"</span>
                        <div class="login-form__password">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                autocomplete="current-password"
                                placeholder="Enter your password"
                                prop:value=password
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="login-form__toggle"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert--danger" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <a class="login-card__forgot" href="/forgot-password">"Forgot password?"</a>
            </div>
        </div>
    }
}
