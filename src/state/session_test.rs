use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::auth::store::{ACCESS_TOKEN_KEY, MemoryStorage, StorageBackend, USER_KEY};

const NOW: i64 = 1_700_000_000;

fn token_expiring_at(exp: i64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": "u-1", "exp": exp }).to_string());
    format!("header.{payload}.signature")
}

fn admin() -> User {
    User {
        id: 1,
        username: "nadia".to_owned(),
        email: "nadia@example.com".to_owned(),
        first_name: "Nadia".to_owned(),
        last_name: "Osei".to_owned(),
        roles: vec!["ROLE_ADMIN".to_owned()],
        last_login: None,
        account_active: Some(true),
    }
}

fn auth_response(exp: i64) -> AuthResponse {
    AuthResponse {
        access_token: token_expiring_at(exp),
        refresh_token: "refresh-1".to_owned(),
        token_type: "Bearer".to_owned(),
        expires_in: 3600,
        user: admin(),
        risk_score: 0.1,
    }
}

fn assert_store_empty(store: &TokenStore) {
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.profile().is_none());
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_valid_token_authenticates() {
    let store = TokenStore::in_memory();
    store.save(&token_expiring_at(NOW + 3600), "refresh-1", &admin());
    let mut state = SessionState::default();

    restore(&mut state, &store, NOW);

    assert!(state.authenticated);
    assert_eq!(state.current_user, Some(admin()));
    assert!(store.access_token().is_some());
}

#[test]
fn restore_with_expired_token_tears_down_locally() {
    let store = TokenStore::in_memory();
    store.save(&token_expiring_at(NOW - 1), "refresh-1", &admin());
    let mut state = SessionState::default();

    restore(&mut state, &store, NOW);

    assert!(!state.authenticated);
    assert!(state.current_user.is_none());
    assert_store_empty(&store);
}

#[test]
fn restore_with_empty_store_stays_unauthenticated() {
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();

    restore(&mut state, &store, NOW);

    assert!(!state.authenticated);
    assert!(state.current_user.is_none());
    assert_store_empty(&store);
}

#[test]
fn restore_with_token_but_no_profile_tears_down() {
    let backend = Arc::new(MemoryStorage::default());
    let store = TokenStore::new(backend.clone());
    store.save(&token_expiring_at(NOW + 3600), "refresh-1", &admin());
    backend.remove(USER_KEY);
    let mut state = SessionState::default();

    restore(&mut state, &store, NOW);

    assert!(!state.authenticated);
    assert_store_empty(&store);
}

#[test]
fn restore_with_malformed_token_tears_down() {
    let backend = Arc::new(MemoryStorage::default());
    let store = TokenStore::new(backend.clone());
    store.save(&token_expiring_at(NOW + 3600), "refresh-1", &admin());
    backend.set(ACCESS_TOKEN_KEY, "garbage");
    let mut state = SessionState::default();

    restore(&mut state, &store, NOW);

    assert!(!state.authenticated);
    assert_store_empty(&store);
}

// =============================================================
// establish
// =============================================================

#[test]
fn establish_persists_then_flags() {
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();
    let response = auth_response(NOW + 3600);

    establish(&mut state, &store, &response);

    assert!(state.authenticated);
    assert_eq!(state.current_user, Some(admin()));
    assert_eq!(store.access_token().as_deref(), Some(response.access_token.as_str()));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(store.profile(), Some(admin()));
}

#[test]
fn establish_on_live_session_never_drops_authentication() {
    // The refresh success path: token and profile are replaced while
    // the authenticated flag stays true throughout.
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();
    establish(&mut state, &store, &auth_response(NOW + 10));
    assert!(state.authenticated);

    establish(&mut state, &store, &auth_response(NOW + 3600));

    assert!(state.authenticated);
    assert_eq!(store.access_token(), Some(token_expiring_at(NOW + 3600)));
}

#[test]
fn establish_replaces_the_profile_wholesale() {
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();
    establish(&mut state, &store, &auth_response(NOW + 10));

    let mut response = auth_response(NOW + 3600);
    response.user.roles = vec!["ROLE_AUDITOR".to_owned()];
    establish(&mut state, &store, &response);

    let roles = state.current_user.as_ref().map(|u| u.roles.clone()).unwrap_or_default();
    assert_eq!(roles, vec!["ROLE_AUDITOR".to_owned()]);
    assert_eq!(store.profile().map(|u| u.roles), Some(vec!["ROLE_AUDITOR".to_owned()]));
}

// =============================================================
// teardown
// =============================================================

#[test]
fn teardown_clears_store_and_flags() {
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();
    establish(&mut state, &store, &auth_response(NOW + 3600));

    teardown(&mut state, &store);

    assert!(!state.authenticated);
    assert!(state.current_user.is_none());
    assert_store_empty(&store);
}

#[test]
fn teardown_is_idempotent() {
    let store = TokenStore::in_memory();
    let mut state = SessionState::default();
    establish(&mut state, &store, &auth_response(NOW + 3600));

    teardown(&mut state, &store);
    teardown(&mut state, &store);

    assert!(!state.authenticated);
    assert_store_empty(&store);
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn is_authenticated_revalidates_expiry_at_call_time() {
    let store = TokenStore::in_memory();
    store.save(&token_expiring_at(NOW + 10), "refresh-1", &admin());

    assert!(is_authenticated(&store, NOW));
    assert!(is_authenticated(&store, NOW + 9));
    assert!(!is_authenticated(&store, NOW + 10));
    assert!(!is_authenticated(&store, NOW + 11));
}

#[test]
fn is_authenticated_is_false_for_an_empty_store() {
    assert!(!is_authenticated(&TokenStore::in_memory(), NOW));
}

#[test]
fn is_authenticated_is_false_for_a_malformed_token() {
    let backend = Arc::new(MemoryStorage::default());
    let store = TokenStore::new(backend.clone());
    backend.set(ACCESS_TOKEN_KEY, "three.bad.parts");

    assert!(!is_authenticated(&store, NOW));
}
