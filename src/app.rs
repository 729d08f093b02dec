//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::auth::claims::now_seconds;
use crate::auth::store::TokenStore;
use crate::components::guard::RedirectIfAuthed;
use crate::components::layout::ConsoleLayout;
use crate::net::auth_client;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::section::SectionPage;
use crate::pages::settings::SettingsPage;
use crate::state::session::{self, SessionState};
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the token store and shared signals, restores any persisted
/// session, provides everything via context, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = TokenStore::browser();
    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    // Restore the persisted session before the first render. An absent
    // or expired token tears down locally without a network exchange.
    session.update(|s| session::restore(s, &store, now_seconds()));

    let initial_theme = theme::read_preference();
    theme::apply(initial_theme);
    ui.update(|u| u.theme = initial_theme);

    provide_context(store.clone());
    provide_context(session);
    provide_context(ui);

    auth_client::spawn_session_watchdog(session, store);

    view! {
        <Stylesheet id="leptos" href="/pkg/warden-console.css"/>
        <Title text="Warden"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RedirectIfAuthed><LoginPage/></RedirectIfAuthed> }
                />
                <Route
                    path=StaticSegment("forgot-password")
                    view=|| view! { <RedirectIfAuthed><ForgotPasswordPage/></RedirectIfAuthed> }
                />
                <Route
                    path=StaticSegment("reset-password")
                    view=|| view! { <RedirectIfAuthed><ResetPasswordPage/></RedirectIfAuthed> }
                />

                <ParentRoute path=StaticSegment("") view=ConsoleLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("users") view=|| view! { <SectionPage title="User Management"/> }/>
                    <Route path=(StaticSegment("users"), StaticSegment("add")) view=|| view! { <SectionPage title="Add User"/> }/>
                    <Route path=(StaticSegment("users"), StaticSegment("roles")) view=|| view! { <SectionPage title="User Roles"/> }/>
                    <Route path=StaticSegment("roles") view=|| view! { <SectionPage title="Role Management"/> }/>
                    <Route path=(StaticSegment("roles"), StaticSegment("permissions")) view=|| view! { <SectionPage title="Permissions"/> }/>
                    <Route path=StaticSegment("security") view=|| view! { <SectionPage title="Threat Dashboard"/> }/>
                    <Route path=(StaticSegment("security"), StaticSegment("alerts")) view=|| view! { <SectionPage title="Security Alerts"/> }/>
                    <Route path=(StaticSegment("security"), StaticSegment("risk")) view=|| view! { <SectionPage title="Risk Assessment"/> }/>
                    <Route path=StaticSegment("audit") view=|| view! { <SectionPage title="Audit Logs"/> }/>
                    <Route path=(StaticSegment("audit"), StaticSegment("failed-logins")) view=|| view! { <SectionPage title="Failed Logins"/> }/>
                    <Route path=(StaticSegment("audit"), StaticSegment("activities")) view=|| view! { <SectionPage title="User Activities"/> }/>
                    <Route path=(StaticSegment("reports"), StaticSegment("security")) view=|| view! { <SectionPage title="Security Reports"/> }/>
                    <Route path=(StaticSegment("reports"), StaticSegment("compliance")) view=|| view! { <SectionPage title="Compliance Reports"/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
