//! Session gateway: orchestrates identity-service exchanges against
//! the token store and the session signal.
//!
//! Every session mutation happens inside a single `update` on the
//! signal, with the store written before the flags flip. Subscribers
//! therefore never observe `authenticated == true` with an empty
//! store, or the reverse.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::auth::store::TokenStore;
use crate::net::api;
use crate::net::error::AuthError;
use crate::net::types::LoginRequest;
use crate::state::session::{self, SessionState};

/// Access tokens within this many seconds of expiry are refreshed
/// proactively by the watchdog.
const REFRESH_THRESHOLD_SECONDS: i64 = 300;

/// How often the watchdog re-inspects the stored token.
#[cfg(feature = "hydrate")]
const WATCHDOG_INTERVAL_MS: u32 = 60_000;

/// Exchange credentials for a session.
///
/// On success the store and signal are committed in one transition.
/// On failure the session is left untouched and the error surfaced to
/// the caller.
pub async fn login(
    session: RwSignal<SessionState>,
    store: TokenStore,
    username: String,
    password: String,
) -> Result<(), AuthError> {
    let response = api::login(&LoginRequest { username, password }).await?;
    session.update(|s| session::establish(s, &store, &response));
    Ok(())
}

/// Log out: best-effort remote notification, unconditional local
/// teardown. Network conditions never block the local logout.
pub async fn logout(session: RwSignal<SessionState>, store: TokenStore) {
    if let Err(e) = api::logout().await {
        leptos::logging::warn!("logout notification failed: {e}");
    }
    session.update(|s| session::teardown(s, &store));
}

/// Mint a fresh session from the stored refresh token.
///
/// Fails fast without a network call when no refresh token is stored,
/// or when another refresh is already outstanding (concurrent calls
/// are coalesced by rejection so the identity service never sees
/// duplicate exchanges). Any remote failure is an unrecoverable
/// session fault and triggers the same teardown as [`logout`]. Success
/// replaces the token and profile without the authenticated flag ever
/// flipping false.
pub async fn refresh(session: RwSignal<SessionState>, store: TokenStore) -> Result<(), AuthError> {
    let Some(refresh_token) = store.refresh_token() else {
        return Err(AuthError::NoRefreshToken);
    };
    if session.with_untracked(|s| s.refresh_in_flight) {
        return Err(AuthError::RefreshInFlight);
    }
    session.update(|s| s.refresh_in_flight = true);

    match api::refresh(&refresh_token).await {
        Ok(response) => {
            session.update(|s| {
                s.refresh_in_flight = false;
                session::establish(s, &store, &response);
            });
            Ok(())
        }
        Err(e) => {
            session.update(|s| s.refresh_in_flight = false);
            logout(session, store).await;
            Err(e)
        }
    }
}

/// `POST /auth/forgot-password` pass-through. No session impact.
pub async fn forgot_password(email: String) -> Result<(), AuthError> {
    api::forgot_password(&email).await
}

/// `POST /auth/reset-password` pass-through. No session impact.
pub async fn reset_password(token: String, new_password: String) -> Result<(), AuthError> {
    api::reset_password(&token, &new_password).await
}

/// `POST /auth/change-password` pass-through. No session impact.
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<(), AuthError> {
    api::change_password(&current_password, &new_password).await
}

/// Whether a token expiring at `expiry` should be refreshed at `now`.
pub fn refresh_due(expiry: i64, now: i64) -> bool {
    now >= expiry - REFRESH_THRESHOLD_SECONDS
}

/// Spawn the background loop that keeps the access token fresh.
///
/// Checks the stored token once a minute and refreshes when it is
/// close to expiry. A failed refresh follows the unconditional-logout
/// rule, which lands the user back at the login boundary.
#[cfg(feature = "hydrate")]
pub fn spawn_session_watchdog(session: RwSignal<SessionState>, store: TokenStore) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                WATCHDOG_INTERVAL_MS,
            )))
            .await;

            if !session.with_untracked(|s| s.authenticated) {
                continue;
            }
            let Some(token) = store.access_token() else {
                continue;
            };

            let now = crate::auth::claims::now_seconds();
            let due = match crate::auth::claims::decode_expiry(&token) {
                Some(expiry) => refresh_due(expiry, now),
                // Undecodable means expired; let refresh settle it.
                None => true,
            };
            if due {
                if let Err(e) = refresh(session, store.clone()).await {
                    leptos::logging::warn!("token refresh failed: {e}");
                }
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn spawn_session_watchdog(_session: RwSignal<SessionState>, _store: TokenStore) {}
