//! # Key/value storage abstraction
//!
//! [`KeyValueStore`] mirrors the browser `Storage` API: string keys, string
//! values, synchronous access. Implementations live in sibling modules
//! ([`crate::MemoryStore`], `FileStore`, `LocalStore`).
//!
//! ## Error handling
//!
//! Backends never surface errors. A read that fails behaves like a missing
//! key and a failed write is logged and dropped, so a full quota or a
//! read-only profile directory degrades to "not remembered" instead of
//! breaking the login flow.

/// String-keyed storage shared by the session record and any cached data.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
