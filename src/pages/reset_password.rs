//! Reset-password page: completes the emailed reset flow.
//!
//! The reset token arrives as a `token` query parameter on the link
//! from the email.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::auth_client;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = move || query.get().get("token").unwrap_or_default();

    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let reset_token = token();
        if reset_token.is_empty() {
            error.set(Some("This reset link is missing its token".to_owned()));
            return;
        }
        let password = new_password.get();
        if password.is_empty() {
            error.set(Some("A new password is required".to_owned()));
            return;
        }
        if password != confirm.get() {
            error.set(Some("Passwords do not match".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth_client::reset_password(reset_token, password).await {
                Ok(()) => done.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <Show
                    when=move || !done.get()
                    fallback=|| view! {
                        <p class="auth-card__done">
                            "Your password has been reset. "
                            <a href="/login">"Sign in"</a>
                        </p>
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            <span>"New password"</span>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=new_password
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__field">
                            <span>"Confirm password"</span>
                            <input
                                type="password"
                                autocomplete="new-password"
                                prop:value=confirm
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>

                        <Show when=move || error.get().is_some()>
                            <div class="alert alert--danger" role="alert">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Reset password" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
