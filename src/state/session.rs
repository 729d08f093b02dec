//! Reactive session state and its transitions.
//!
//! The state lives in a context-provided `RwSignal<SessionState>`.
//! Every mutation runs one of the transition functions below inside a
//! single `update` call: the token store write fully commits before
//! the flags flip, and subscribers are only notified afterwards, so no
//! observer ever sees `authenticated == true` alongside an empty or
//! stale store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::auth::claims;
use crate::auth::store::TokenStore;
use crate::net::types::{AuthResponse, User};

/// In-memory session snapshot broadcast to subscribers.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub authenticated: bool,
    pub current_user: Option<User>,
    pub refresh_in_flight: bool,
}

/// Restore a persisted session at startup.
///
/// A present, unexpired token plus a cached profile restores the
/// authenticated session. Anything else tears the session down
/// locally; the startup path never calls the remote logout endpoint.
pub fn restore(state: &mut SessionState, store: &TokenStore, now_seconds: i64) {
    match (store.access_token(), store.profile()) {
        (Some(token), Some(profile)) if !claims::is_expired(&token, now_seconds) => {
            state.authenticated = true;
            state.current_user = Some(profile);
        }
        _ => teardown(state, store),
    }
}

/// Commit a successful login or refresh exchange.
///
/// `authenticated` is only ever set true here, so a refresh replaces
/// the token and profile without the session passing through an
/// unauthenticated intermediate.
pub fn establish(state: &mut SessionState, store: &TokenStore, response: &AuthResponse) {
    store.save(&response.access_token, &response.refresh_token, &response.user);
    state.authenticated = true;
    state.current_user = Some(response.user.clone());
}

/// Destroy the session: clear the store, then drop the flags.
/// Idempotent.
pub fn teardown(state: &mut SessionState, store: &TokenStore) {
    store.clear();
    state.authenticated = false;
    state.current_user = None;
}

/// Authoritative authentication check.
///
/// Re-reads the stored token and re-validates its expiry at call time.
/// Route guards treat this, not the cached flag, as the source of
/// truth.
pub fn is_authenticated(store: &TokenStore, now_seconds: i64) -> bool {
    store
        .access_token()
        .is_some_and(|token| !claims::is_expired(&token, now_seconds))
}
