//! Forgot-password page: requests a reset email.
//!
//! Stateless with respect to the session; failures are shown verbatim.

use leptos::prelude::*;

use crate::net::auth_client;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            error.set(Some("Email is required".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth_client::forgot_password(address).await {
                Ok(()) => sent.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <Show
                    when=move || !sent.get()
                    fallback=|| view! {
                        <p class="auth-card__done">
                            "If that address is registered, a reset link is on its way."
                        </p>
                    }
                >
                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=email
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <Show when=move || error.get().is_some()>
                            <div class="alert alert--danger" role="alert">
                                {move || error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                        </button>
                    </form>
                </Show>
                <a class="auth-card__back" href="/login">"Back to sign in"</a>
            </div>
        </div>
    }
}
