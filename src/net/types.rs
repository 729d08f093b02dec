//! Wire types for the identity service.
//!
//! Field names (camelCase on the wire) are the compatibility surface
//! with the service; renaming anything here is a protocol change.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile as returned by the identity service.
///
/// Replaced wholesale on every successful login or refresh; the client
/// never mutates individual fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub account_active: Option<bool>,
}

impl User {
    /// Header display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Credentials submitted to `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response shape shared by `POST /auth/login` and `POST /auth/refresh`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
    #[serde(default)]
    pub risk_score: f64,
}

/// Body of `POST /auth/refresh`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Clone, Debug, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /auth/reset-password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Body of `POST /auth/change-password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
