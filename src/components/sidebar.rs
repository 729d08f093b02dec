//! Navigation sidebar: a static menu tree pruned by the current
//! user's roles.
//!
//! Role tags on menu entries control visibility only; the routes
//! themselves stay behind `RequireAuth`. An entry without tags is
//! visible to everyone who reached the console.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::auth::roles::has_any_role;
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// One navigation entry; groups carry children instead of a route.
pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Option<&'static str>,
    pub roles: &'static [&'static str],
    pub children: &'static [MenuItem],
}

/// The console's navigation tree.
pub const MENU: &[MenuItem] = &[
    MenuItem {
        label: "Dashboard",
        icon: "fas fa-tachometer-alt",
        route: Some("/"),
        roles: &[],
        children: &[],
    },
    MenuItem {
        label: "User Management",
        icon: "fas fa-users",
        route: None,
        roles: &["ROLE_ADMIN", "ROLE_USER_MANAGER"],
        children: &[
            MenuItem { label: "All Users", icon: "fas fa-list", route: Some("/users"), roles: &[], children: &[] },
            MenuItem { label: "Add User", icon: "fas fa-user-plus", route: Some("/users/add"), roles: &[], children: &[] },
            MenuItem { label: "User Roles", icon: "fas fa-user-tag", route: Some("/users/roles"), roles: &[], children: &[] },
        ],
    },
    MenuItem {
        label: "Role Management",
        icon: "fas fa-user-shield",
        route: None,
        roles: &["ROLE_ADMIN"],
        children: &[
            MenuItem { label: "All Roles", icon: "fas fa-list", route: Some("/roles"), roles: &[], children: &[] },
            MenuItem { label: "Permissions", icon: "fas fa-key", route: Some("/roles/permissions"), roles: &[], children: &[] },
        ],
    },
    MenuItem {
        label: "Security Monitoring",
        icon: "fas fa-shield-alt",
        route: None,
        roles: &["ROLE_ADMIN", "ROLE_SECURITY_OFFICER"],
        children: &[
            MenuItem { label: "Threat Dashboard", icon: "fas fa-chart-line", route: Some("/security"), roles: &[], children: &[] },
            MenuItem { label: "Security Alerts", icon: "fas fa-exclamation-triangle", route: Some("/security/alerts"), roles: &[], children: &[] },
            MenuItem { label: "Risk Assessment", icon: "fas fa-chart-pie", route: Some("/security/risk"), roles: &[], children: &[] },
        ],
    },
    MenuItem {
        label: "Audit Logs",
        icon: "fas fa-clipboard-list",
        route: None,
        roles: &["ROLE_ADMIN", "ROLE_AUDITOR"],
        children: &[
            MenuItem { label: "All Logs", icon: "fas fa-list", route: Some("/audit"), roles: &[], children: &[] },
            MenuItem { label: "Failed Logins", icon: "fas fa-ban", route: Some("/audit/failed-logins"), roles: &[], children: &[] },
            MenuItem { label: "User Activities", icon: "fas fa-user-clock", route: Some("/audit/activities"), roles: &[], children: &[] },
        ],
    },
    MenuItem {
        label: "Reports",
        icon: "fas fa-chart-bar",
        route: None,
        roles: &["ROLE_ADMIN", "ROLE_AUDITOR"],
        children: &[
            MenuItem { label: "Security Reports", icon: "fas fa-file-alt", route: Some("/reports/security"), roles: &[], children: &[] },
            MenuItem { label: "Compliance Reports", icon: "fas fa-clipboard-check", route: Some("/reports/compliance"), roles: &[], children: &[] },
        ],
    },
    MenuItem {
        label: "Settings",
        icon: "fas fa-cog",
        route: Some("/settings"),
        roles: &["ROLE_ADMIN"],
        children: &[],
    },
];

/// Whether the current user may see this menu entry.
pub fn item_visible(item: &MenuItem, user: Option<&User>) -> bool {
    has_any_role(user, item.roles)
}

/// Collapsible navigation sidebar.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    // Index of the expanded group; opening one closes the others.
    let expanded = RwSignal::new(None::<usize>);

    let class = move || {
        if ui.get().sidebar_collapsed {
            "sidebar sidebar--collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=class>
            <nav class="sidebar__nav">
                <ul class="sidebar__list">
                    {move || {
                        let user = session.get().current_user;
                        MENU.iter()
                            .enumerate()
                            .filter(|(_, item)| item_visible(item, user.as_ref()))
                            .map(|(index, item)| menu_entry(index, item, user.as_ref(), expanded))
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </nav>
            <div class="sidebar__footer">
                <span class="sidebar__status-dot"></span>
                <span class="sidebar__status-text">"System Online"</span>
            </div>
        </aside>
    }
}

fn menu_entry(
    index: usize,
    item: &'static MenuItem,
    user: Option<&User>,
    expanded: RwSignal<Option<usize>>,
) -> AnyView {
    if item.children.is_empty() {
        let route = item.route.unwrap_or("/");
        view! {
            <li class="sidebar__item">
                <a class="sidebar__link" href=route>
                    <i class=item.icon></i>
                    <span class="sidebar__label">{item.label}</span>
                </a>
            </li>
        }
        .into_any()
    } else {
        let visible_children = item
            .children
            .iter()
            .filter(|child| item_visible(child, user))
            .collect::<Vec<_>>();
        let is_expanded = move || expanded.get() == Some(index);
        let on_toggle = move |_| {
            expanded.update(|e| {
                *e = if *e == Some(index) { None } else { Some(index) };
            });
        };

        view! {
            <li class="sidebar__item sidebar__item--group">
                <button class="sidebar__link sidebar__toggle" on:click=on_toggle>
                    <i class=item.icon></i>
                    <span class="sidebar__label">{item.label}</span>
                    <span class="sidebar__arrow">{move || if is_expanded() { "v" } else { ">" }}</span>
                </button>
                <ul class=move || {
                    if is_expanded() {
                        "sidebar__submenu sidebar__submenu--open"
                    } else {
                        "sidebar__submenu"
                    }
                }>
                    {visible_children
                        .into_iter()
                        .map(|child| {
                            let route = child.route.unwrap_or("/");
                            view! {
                                <li class="sidebar__subitem">
                                    <a class="sidebar__sublink" href=route>
                                        <i class=child.icon></i>
                                        <span>{child.label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </li>
        }
        .into_any()
    }
}
