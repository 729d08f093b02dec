//! Role evaluation over the current user snapshot.
//!
//! Role identifiers are opaque strings with no hierarchy or wildcard
//! semantics. These functions are the single source of truth for
//! access decisions; the `ROLE_` prefix stripping below exists for
//! display only and never feeds back into evaluation.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use crate::net::types::User;

/// True iff the user holds exactly this role identifier.
pub fn has_role(user: Option<&User>, role: &str) -> bool {
    user.is_some_and(|u| u.roles.iter().any(|held| held == role))
}

/// True iff the user's role set intersects `required`.
///
/// An empty requirement means "no restriction" and is satisfied by
/// anyone, including a visitor with no session at all.
pub fn has_any_role(user: Option<&User>, required: &[&str]) -> bool {
    if required.is_empty() {
        return true;
    }
    user.is_some_and(|u| required.iter().any(|role| u.roles.iter().any(|held| held == role)))
}

/// Presentation form of a role identifier: the conventional `ROLE_`
/// prefix is dropped.
pub fn display_role(role: &str) -> &str {
    role.strip_prefix("ROLE_").unwrap_or(role)
}
