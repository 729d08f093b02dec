//! Raw HTTP exchanges with the identity service.
//!
//! Client-side (hydrate): real calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the session only
//! exists in the browser.
//!
//! Nothing here retries or interprets failures beyond extracting the
//! service's error message; policy (teardown, coalescing) lives in
//! [`crate::net::auth_client`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::AuthError;
use crate::net::types::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RefreshRequest,
    ResetPasswordRequest,
};

/// Exchange credentials for a session via `POST /api/auth/login`.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", credentials).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Notify the service of logout via `POST /api/auth/logout`.
///
/// Callers ignore the outcome for control flow: local teardown always
/// proceeds.
pub async fn logout() -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(service_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Mint a new session from a refresh token via `POST /api/auth/refresh`.
pub async fn refresh(refresh_token: &str) -> Result<AuthResponse, AuthError> {
    let request = RefreshRequest { refresh_token: refresh_token.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/refresh", &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Request a reset email via `POST /api/auth/forgot-password`.
pub async fn forgot_password(email: &str) -> Result<(), AuthError> {
    let request = ForgotPasswordRequest { email: email.to_owned() };
    #[cfg(feature = "hydrate")]
    {
        post_command("/api/auth/forgot-password", &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Complete an emailed reset via `POST /api/auth/reset-password`.
pub async fn reset_password(token: &str, new_password: &str) -> Result<(), AuthError> {
    let request = ResetPasswordRequest {
        token: token.to_owned(),
        new_password: new_password.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_command("/api/auth/reset-password", &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Change the signed-in user's password via `POST /api/auth/change-password`.
pub async fn change_password(current_password: &str, new_password: &str) -> Result<(), AuthError> {
    let request = ChangePasswordRequest {
        current_password: current_password.to_owned(),
        new_password: new_password.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        post_command("/api/auth/change-password", &request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(unavailable())
    }
}

/// Extract the service's error message from a response body,
/// preferring `message` over `error`.
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("error").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, AuthError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(service_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| AuthError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_command<B: serde::Serialize>(url: &str, body: &B) -> Result<(), AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(service_error(resp).await);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn service_error(resp: gloo_net::http::Response) -> AuthError {
    let status = resp.status();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    AuthError::Service { status, message }
}
