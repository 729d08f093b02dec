//! Dashboard landing page: headline stats and role-aware quick links.

use leptos::prelude::*;

use crate::auth::roles::has_any_role;
use crate::state::session::SessionState;

/// Quick links shown on the dashboard, tagged with the roles that may
/// use the target section.
const QUICK_LINKS: &[(&str, &str, &[&str])] = &[
    ("Manage users", "/users", &["ROLE_ADMIN", "ROLE_USER_MANAGER"]),
    ("Review audit logs", "/audit", &["ROLE_ADMIN", "ROLE_AUDITOR"]),
    ("Security alerts", "/security/alerts", &["ROLE_ADMIN", "ROLE_SECURITY_OFFICER"]),
    ("Console settings", "/settings", &["ROLE_ADMIN"]),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .current_user
            .map(|u| format!("Welcome back, {}", u.first_name))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    let links = move || {
        let user = session.get().current_user;
        QUICK_LINKS
            .iter()
            .filter(|(_, _, roles)| has_any_role(user.as_ref(), roles))
            .map(|(label, route, _)| {
                view! { <a class="quick-link" href=*route>{*label}</a> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>{greeting}</h1>
                <p class="dashboard__subtitle">"Access activity at a glance."</p>
            </header>

            <div class="dashboard__cards">
                <div class="stat-card">
                    <span class="stat-card__label">"Active users"</span>
                    <span class="stat-card__value">"128"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Open alerts"</span>
                    <span class="stat-card__value">"3"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Audit events (24h)"</span>
                    <span class="stat-card__value">"1,942"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Active sessions"</span>
                    <span class="stat-card__value">"37"</span>
                </div>
            </div>

            <section class="dashboard__quick">
                <h2>"Quick actions"</h2>
                <div class="dashboard__quick-grid">{links}</div>
            </section>
        </div>
    }
}
