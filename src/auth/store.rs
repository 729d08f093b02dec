//! Durable session persistence.
//!
//! Three named slots in browser localStorage hold the access token,
//! refresh token, and cached user profile so a session survives page
//! reloads. Pure persistence: no validation, no network. All writes
//! happen on the single UI thread with no await points in between, so
//! a reader never observes a partially written session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::net::types::User;

/// localStorage slot for the raw access token.
pub const ACCESS_TOKEN_KEY: &str = "warden_access_token";
/// localStorage slot for the raw refresh token.
pub const REFRESH_TOKEN_KEY: &str = "warden_refresh_token";
/// localStorage slot for the serialized user profile.
pub const USER_KEY: &str = "warden_user";

/// Key/value persistence behind [`TokenStore`].
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage backend. Degrades to a no-op outside a browser
/// or when storage access is denied.
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for server rendering and tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Persistent store for the access token, refresh token, and cached
/// user profile.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by browser localStorage; falls back to memory
    /// outside a browser build.
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Arc::new(LocalStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()))
    }

    /// Persist all three session slots.
    pub fn save(&self, access_token: &str, refresh_token: &str, user: &User) {
        self.backend.set(ACCESS_TOKEN_KEY, access_token);
        self.backend.set(REFRESH_TOKEN_KEY, refresh_token);
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &json);
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    /// The cached profile, if present and decodable.
    pub fn profile(&self) -> Option<User> {
        let json = self.backend.get(USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Remove all three slots. Safe to call repeatedly.
    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
