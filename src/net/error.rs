//! Failure taxonomy for identity-service exchanges.

use thiserror::Error;

/// Everything that can go wrong talking to the identity service.
///
/// None of these are fatal to the console: every failure path lands on
/// the unauthenticated state and the login boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The service answered with a non-success status. For login this
    /// is the credential-rejection case and `message` carries the
    /// service's own wording.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The exchange never completed (transport failure).
    #[error("network error: {0}")]
    Network(String),

    /// Refresh requested with no stored refresh token.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// A refresh exchange is already outstanding.
    #[error("a token refresh is already in flight")]
    RefreshInFlight,
}

impl AuthError {
    /// Message suitable for direct display in a form banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service { message, .. } => message.clone(),
            Self::Network(_) => "Unable to reach the authentication service".to_owned(),
            Self::NoRefreshToken | Self::RefreshInFlight => self.to_string(),
        }
    }
}
