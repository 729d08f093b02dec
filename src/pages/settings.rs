//! Settings page: password change plus admin-only console options.

use leptos::prelude::*;

use crate::auth::roles::has_role;
use crate::net::auth_client;
use crate::state::session::SessionState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let is_admin = move || has_role(session.get().current_user.as_ref(), "ROLE_ADMIN");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        saved.set(false);
        let current_value = current.get();
        let new_value = new_password.get();
        if current_value.is_empty() || new_value.is_empty() {
            error.set(Some("Both the current and new password are required".to_owned()));
            return;
        }
        if new_value != confirm.get() {
            error.set(Some("New passwords do not match".to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth_client::change_password(current_value, new_value).await {
                Ok(()) => {
                    saved.set(true);
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="settings">
            <h1>"Settings"</h1>

            <section class="settings__section">
                <h2>"Change password"</h2>
                <form class="settings__form" on:submit=on_submit>
                    <label class="settings__field">
                        <span>"Current password"</span>
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=current
                            on:input=move |ev| current.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings__field">
                        <span>"New password"</span>
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=new_password
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings__field">
                        <span>"Confirm new password"</span>
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
                    <Show when=move || saved.get()>
                        <div class="alert alert--success" role="status">
                            "Password updated"
                        </div>
                    </Show>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Update password" }}
                    </button>
                </form>
            </section>

            <Show when=is_admin>
                <section class="settings__section settings__section--admin">
                    <h2>"Console administration"</h2>
                    <ul class="settings__admin-list">
                        <li>"Session refresh threshold: 5 minutes before expiry"</li>
                        <li>"Audit retention: 90 days"</li>
                        <li>"Failed-login lockout: 5 attempts"</li>
                    </ul>
                </section>
            </Show>
        </div>
    }
}
