use super::*;

fn profile() -> User {
    User {
        id: 3,
        username: "jonas".to_owned(),
        email: "jonas@example.com".to_owned(),
        first_name: "Jonas".to_owned(),
        last_name: "Berg".to_owned(),
        roles: vec!["ROLE_AUDITOR".to_owned()],
        last_login: Some("2026-08-01T09:30:00Z".to_owned()),
        account_active: Some(true),
    }
}

// =============================================================
// save / load
// =============================================================

#[test]
fn fresh_store_reads_as_absent() {
    let store = TokenStore::in_memory();
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.profile().is_none());
}

#[test]
fn save_then_load_returns_all_three_slots() {
    let store = TokenStore::in_memory();
    store.save("access-1", "refresh-1", &profile());

    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(store.profile(), Some(profile()));
}

#[test]
fn save_overwrites_the_previous_session() {
    let store = TokenStore::in_memory();
    store.save("access-1", "refresh-1", &profile());

    let mut replacement = profile();
    replacement.id = 4;
    replacement.username = "sigrid".to_owned();
    store.save("access-2", "refresh-2", &replacement);

    assert_eq!(store.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
    assert_eq!(store.profile().map(|u| u.username), Some("sigrid".to_owned()));
}

#[test]
fn corrupt_profile_reads_as_absent() {
    let backend = Arc::new(MemoryStorage::default());
    let store = TokenStore::new(backend.clone());
    store.save("access-1", "refresh-1", &profile());
    backend.set(USER_KEY, "{not valid json");

    assert!(store.profile().is_none());
    assert_eq!(store.access_token().as_deref(), Some("access-1"));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_removes_every_slot() {
    let store = TokenStore::in_memory();
    store.save("access-1", "refresh-1", &profile());

    store.clear();

    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.profile().is_none());
}

#[test]
fn clear_is_idempotent() {
    let store = TokenStore::in_memory();
    store.clear();
    store.save("access-1", "refresh-1", &profile());
    store.clear();
    store.clear();

    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.profile().is_none());
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_backend_round_trips_entries() {
    let backend = MemoryStorage::default();
    assert!(backend.get("k").is_none());

    backend.set("k", "v1");
    assert_eq!(backend.get("k").as_deref(), Some("v1"));

    backend.set("k", "v2");
    assert_eq!(backend.get("k").as_deref(), Some("v2"));

    backend.remove("k");
    assert!(backend.get("k").is_none());
}
