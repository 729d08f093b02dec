//! Bearer-token claims inspection.
//!
//! Tokens are decoded, never verified: the client reads the expiry
//! claim for UI responsiveness and leaves authoritative enforcement to
//! the identity service on every privileged request. Anything that
//! fails to decode is treated as expired.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the `exp` claim (seconds since the epoch) from a token.
///
/// Only the payload segment between the first and second `.` is
/// inspected. Returns `None` when the structure, encoding, or claim is
/// not what a well-formed token carries.
pub fn decode_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Whether a token is expired at `now_seconds`.
///
/// Fail closed: a token with no decodable numeric `exp` claim is
/// expired, and `exp == now` already counts as expired.
pub fn is_expired(token: &str, now_seconds: i64) -> bool {
    decode_expiry(token).is_none_or(|exp| now_seconds >= exp)
}

/// Current wall-clock time in seconds since the epoch.
///
/// Outside a browser there is no session to validate, so the stub
/// value only ever meets an empty token store.
pub fn now_seconds() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
