//! # User profile bag
//!
//! The server returns the logged-in user as a plain JSON object (`username`,
//! `realName`, `email`, `roles`, audit columns, ...). The client only reads a
//! few of those keys and must round-trip the rest untouched when it writes
//! the profile back to storage, so [`UserProfile`] keeps the object as-is and
//! exposes typed accessors for the fields the UI needs.
//!
//! Partial updates are spread-merged: [`UserProfile::merge`] overlays the new
//! keys and leaves every other key in place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely typed user profile, serialized transparently as a JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper used by tests and forms.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn username(&self) -> Option<&str> {
        self.get_str("username")
    }

    pub fn real_name(&self) -> Option<&str> {
        self.get_str("realName")
    }

    /// Real name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.real_name().or_else(|| self.username()).unwrap_or_default()
    }

    /// Overlay every key of `partial` onto this profile.
    pub fn merge(&mut self, partial: UserProfile) {
        for (key, value) in partial.0 {
            self.0.insert(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Parse a stored profile. Anything that is not a JSON object yields `None`.
    pub fn from_json(s: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(s).ok()? {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }
}
