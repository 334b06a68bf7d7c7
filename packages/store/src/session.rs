//! # Persisted session record
//!
//! Two storage keys survive a page reload:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token string |
//! | [`USER_INFO_KEY`] (`"userInfo"`) | the [`UserProfile`] serialized as a JSON object |
//!
//! Roles and permissions are never persisted; they are re-fetched on
//! bootstrap.

use crate::kv::KeyValueStore;
use crate::models::UserProfile;

pub const TOKEN_KEY: &str = "token";
pub const USER_INFO_KEY: &str = "userInfo";

/// Stored token, with an empty string treated as absent.
pub fn load_token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn save_token(store: &dyn KeyValueStore, token: &str) {
    store.set(TOKEN_KEY, token);
}

pub fn load_profile(store: &dyn KeyValueStore) -> Option<UserProfile> {
    let raw = store.get(USER_INFO_KEY)?;
    let profile = UserProfile::from_json(&raw);
    if profile.is_none() {
        tracing::warn!("Ignoring unreadable {} entry", USER_INFO_KEY);
    }
    profile
}

pub fn save_profile(store: &dyn KeyValueStore, profile: &UserProfile) {
    store.set(USER_INFO_KEY, &profile.to_json());
}

/// Remove both session keys.
pub fn clear(store: &dyn KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_INFO_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert!(load_token(&store).is_none());
        assert!(load_profile(&store).is_none());

        save_token(&store, "tok");
        save_profile(&store, &UserProfile::new().with("username", "admin"));

        assert_eq!(load_token(&store).as_deref(), Some("tok"));
        assert_eq!(load_profile(&store).unwrap().username(), Some("admin"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok"));

        clear(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(load_token(&store).is_none());
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let store = MemoryStore::new();
        store.set(USER_INFO_KEY, "{broken");
        assert!(load_profile(&store).is_none());
    }
}
