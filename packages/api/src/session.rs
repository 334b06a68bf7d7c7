//! # Session container
//!
//! [`Session`] owns the bearer token, the user profile, and the role and
//! permission lists for the running app. It is a cheap-clone handle: the
//! client, the router guard and the UI all hold clones of the same state.
//!
//! Token and profile are written through to a [`KeyValueStore`] under the
//! `token` / `userInfo` keys (see [`store::session`]); roles and permissions
//! live in memory only.
//!
//! Mutation is single-threaded: every change comes from a user action or
//! from the response stage of one request, so `Rc<RefCell<_>>` is enough.
//! Listeners registered with [`Session::subscribe`] run after every
//! mutation, which is how the UI mirrors the state into a signal.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use store::{session as record, KeyValueStore, UserProfile};

/// Snapshot of the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.profile
            .as_ref()
            .map(UserProfile::display_name)
            .unwrap_or_default()
    }
}

/// Everything a successful login hands back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub token: String,
    #[serde(default)]
    pub user_info: UserProfile,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

type Listener = Box<dyn Fn(&SessionState)>;

#[derive(Clone)]
pub struct Session {
    state: Rc<RefCell<SessionState>>,
    storage: Rc<dyn KeyValueStore>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Session {
    /// Start from whatever token is persisted. The profile is restored
    /// separately by the bootstrap check.
    pub fn restore(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = record::load_token(&*storage);
        Self {
            state: Rc::new(RefCell::new(SessionState {
                token,
                ..SessionState::default()
            })),
            storage,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone().filter(|t| !t.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.borrow().is_logged_in()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.borrow().profile.clone()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.state.borrow().roles.iter().any(|r| r == role)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.state.borrow().permissions.iter().any(|p| p == permission)
    }

    /// Register a callback invoked after every mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionState) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }

    /// Store a fresh login and persist token + profile.
    pub fn establish(&self, grant: LoginGrant) {
        record::save_token(&*self.storage, &grant.token);
        record::save_profile(&*self.storage, &grant.user_info);
        *self.state.borrow_mut() = SessionState {
            token: Some(grant.token),
            profile: Some(grant.user_info),
            roles: grant.roles,
            permissions: grant.permissions,
        };
        self.notify();
    }

    /// Load the profile cached in storage, if any.
    pub fn restore_profile(&self) {
        if let Some(profile) = record::load_profile(&*self.storage) {
            self.state.borrow_mut().profile = Some(profile);
            self.notify();
        }
    }

    /// Replace the in-memory profile with the server's view of the user.
    pub fn apply_current(&self, profile: UserProfile) {
        self.state.borrow_mut().profile = Some(profile);
        self.notify();
    }

    /// Merge a partial profile and persist the result.
    pub fn update_profile(&self, partial: UserProfile) {
        let merged = {
            let mut state = self.state.borrow_mut();
            let profile = state.profile.get_or_insert_with(UserProfile::default);
            profile.merge(partial);
            profile.clone()
        };
        record::save_profile(&*self.storage, &merged);
        self.notify();
    }

    /// Forget the session in memory and in storage.
    pub fn clear(&self) {
        *self.state.borrow_mut() = SessionState::default();
        record::clear(&*self.storage);
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use store::session::{TOKEN_KEY, USER_INFO_KEY};
    use store::MemoryStore;

    fn grant() -> LoginGrant {
        LoginGrant {
            token: "tok-1".into(),
            user_info: UserProfile::new().with("username", "admin").with("realName", "Admin"),
            permissions: vec!["*:*:*".into()],
            roles: vec!["admin".into()],
        }
    }

    #[test]
    fn test_restore_reads_persisted_token() {
        let storage = MemoryStore::new();
        storage.set(TOKEN_KEY, "persisted");
        let session = Session::restore(Rc::new(storage));
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("persisted"));
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_establish_persists_and_clear_removes() {
        let storage = MemoryStore::new();
        let session = Session::restore(Rc::new(storage.clone()));
        assert!(!session.is_logged_in());

        session.establish(grant());
        assert!(session.is_logged_in());
        assert!(session.has_role("admin"));
        assert!(session.has_permission("*:*:*"));
        assert!(!session.has_role("teacher"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert!(storage.get(USER_INFO_KEY).unwrap().contains("\"username\":\"admin\""));

        session.clear();
        assert!(!session.is_logged_in());
        assert!(session.profile().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_update_profile_merges_and_persists() {
        let storage = MemoryStore::new();
        let session = Session::restore(Rc::new(storage.clone()));
        session.establish(grant());

        session.update_profile(UserProfile::new().with("email", "a@b.c"));

        let profile = session.profile().unwrap();
        assert_eq!(profile.username(), Some("admin"));
        assert_eq!(profile.get("email").and_then(|v| v.as_str()), Some("a@b.c"));
        let stored = store::session::load_profile(&storage).unwrap();
        assert_eq!(stored, profile);
    }

    #[test]
    fn test_listeners_fire_on_each_mutation() {
        let session = Session::restore(Rc::new(MemoryStore::new()));
        let calls = Rc::new(Cell::new(0));
        let last_logged_in = Rc::new(Cell::new(false));
        {
            let calls = calls.clone();
            let last = last_logged_in.clone();
            session.subscribe(move |state| {
                calls.set(calls.get() + 1);
                last.set(state.is_logged_in());
            });
        }

        session.establish(grant());
        assert!(last_logged_in.get());
        session.apply_current(UserProfile::new().with("username", "admin"));
        session.clear();
        assert!(!last_logged_in.get());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::restore(Rc::new(MemoryStore::new()));
        let other = session.clone();
        session.establish(grant());
        assert!(other.is_logged_in());
        assert_eq!(other.snapshot().display_name(), "Admin");
    }
}
