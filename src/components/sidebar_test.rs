use super::*;

fn user_with_roles(roles: &[&str]) -> User {
    User {
        id: 9,
        username: "kai".to_owned(),
        email: "kai@example.com".to_owned(),
        first_name: "Kai".to_owned(),
        last_name: "Tanaka".to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        last_login: None,
        account_active: Some(true),
    }
}

fn entry(label: &str) -> &'static MenuItem {
    MENU.iter().find(|item| item.label == label).expect("menu entry")
}

// =============================================================
// item_visible
// =============================================================

#[test]
fn untagged_entries_are_visible_to_everyone() {
    let dashboard = entry("Dashboard");
    assert!(item_visible(dashboard, None));
    assert!(item_visible(dashboard, Some(&user_with_roles(&[]))));
}

#[test]
fn admin_sees_every_section() {
    let admin = user_with_roles(&["ROLE_ADMIN"]);
    for item in MENU {
        assert!(item_visible(item, Some(&admin)), "admin should see {}", item.label);
    }
}

#[test]
fn auditor_sees_audit_and_reports_but_not_user_management() {
    let auditor = user_with_roles(&["ROLE_AUDITOR"]);
    assert!(item_visible(entry("Audit Logs"), Some(&auditor)));
    assert!(item_visible(entry("Reports"), Some(&auditor)));
    assert!(!item_visible(entry("User Management"), Some(&auditor)));
    assert!(!item_visible(entry("Settings"), Some(&auditor)));
}

#[test]
fn user_manager_sees_user_management_only() {
    let manager = user_with_roles(&["ROLE_USER_MANAGER"]);
    assert!(item_visible(entry("User Management"), Some(&manager)));
    assert!(!item_visible(entry("Role Management"), Some(&manager)));
    assert!(!item_visible(entry("Security Monitoring"), Some(&manager)));
}

#[test]
fn tagged_entries_are_hidden_without_a_session() {
    assert!(!item_visible(entry("Settings"), None));
    assert!(!item_visible(entry("Audit Logs"), None));
}

#[test]
fn group_children_without_tags_follow_their_parent() {
    let manager = user_with_roles(&["ROLE_USER_MANAGER"]);
    for child in entry("User Management").children {
        assert!(item_visible(child, Some(&manager)));
    }
}

// =============================================================
// menu shape
// =============================================================

#[test]
fn leaves_carry_routes_and_groups_carry_children() {
    fn check(items: &[MenuItem]) {
        for item in items {
            if item.children.is_empty() {
                assert!(item.route.is_some(), "{} needs a route", item.label);
            } else {
                assert!(item.route.is_none(), "{} is a group", item.label);
                check(item.children);
            }
        }
    }
    check(MENU);
}
