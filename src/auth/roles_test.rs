use super::*;

fn user_with_roles(roles: &[&str]) -> User {
    User {
        id: 7,
        username: "amara".to_owned(),
        email: "amara@example.com".to_owned(),
        first_name: "Amara".to_owned(),
        last_name: "Diallo".to_owned(),
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        last_login: None,
        account_active: Some(true),
    }
}

// =============================================================
// has_role
// =============================================================

#[test]
fn has_role_matches_exact_identifier() {
    let user = user_with_roles(&["ROLE_ADMIN", "ROLE_AUDITOR"]);
    assert!(has_role(Some(&user), "ROLE_ADMIN"));
    assert!(has_role(Some(&user), "ROLE_AUDITOR"));
}

#[test]
fn has_role_rejects_missing_role() {
    let user = user_with_roles(&["ROLE_AUDITOR"]);
    assert!(!has_role(Some(&user), "ROLE_ADMIN"));
}

#[test]
fn has_role_has_no_prefix_or_hierarchy_semantics() {
    let user = user_with_roles(&["ROLE_ADMIN"]);
    assert!(!has_role(Some(&user), "ADMIN"));
    assert!(!has_role(Some(&user), "ROLE_"));
    assert!(!has_role(Some(&user), "ROLE_ADMIN_EXTRA"));
}

#[test]
fn has_role_is_false_without_a_user() {
    assert!(!has_role(None, "ROLE_ADMIN"));
}

// =============================================================
// has_any_role
// =============================================================

#[test]
fn empty_requirement_is_unrestricted() {
    let no_roles = user_with_roles(&[]);
    assert!(has_any_role(Some(&no_roles), &[]));
    assert!(has_any_role(None, &[]));
}

#[test]
fn disjoint_role_sets_are_rejected() {
    let auditor = user_with_roles(&["ROLE_AUDITOR"]);
    assert!(!has_any_role(Some(&auditor), &["ROLE_ADMIN"]));
}

#[test]
fn intersecting_role_sets_are_accepted() {
    let user = user_with_roles(&["ROLE_ADMIN", "ROLE_AUDITOR"]);
    assert!(has_any_role(Some(&user), &["ROLE_ADMIN"]));
    assert!(has_any_role(Some(&user), &["ROLE_USER_MANAGER", "ROLE_AUDITOR"]));
}

#[test]
fn requirement_without_user_is_rejected() {
    assert!(!has_any_role(None, &["ROLE_ADMIN"]));
}

// =============================================================
// display_role
// =============================================================

#[test]
fn display_role_strips_the_conventional_prefix() {
    assert_eq!(display_role("ROLE_ADMIN"), "ADMIN");
    assert_eq!(display_role("ROLE_SECURITY_OFFICER"), "SECURITY_OFFICER");
}

#[test]
fn display_role_leaves_other_identifiers_alone() {
    assert_eq!(display_role("AUDITOR"), "AUDITOR");
    assert_eq!(display_role("SUPER_ROLE_X"), "SUPER_ROLE_X");
}

#[test]
fn display_stripping_never_affects_evaluation() {
    let user = user_with_roles(&["ROLE_ADMIN"]);
    assert!(has_role(Some(&user), "ROLE_ADMIN"));
    assert!(!has_role(Some(&user), display_role("ROLE_ADMIN")));
}
