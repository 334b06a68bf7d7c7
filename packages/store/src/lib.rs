//! # Client-side persistence for the gradebook admin
//!
//! Everything the browser keeps between page loads lives behind this crate:
//! the bearer token, the cached user profile, and the `gradebook.toml`
//! client configuration.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`kv`] | The [`KeyValueStore`] trait every backend implements. |
//! | `memory` | [`MemoryStore`], used by tests and non-browser fallbacks. |
//! | `file_store` | [`FileStore`], one file per key on native targets. |
//! | `local` | `LocalStore`, backed by `window.localStorage` (wasm32 + `web`). |
//! | [`models`] | [`UserProfile`], the loosely typed profile bag. |
//! | [`session`] | Persisted session record (`token`, `userInfo` keys). |
//! | [`config`] | [`ClientConfig`], parsed from `gradebook.toml`. |

pub mod config;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::ClientConfig;
pub use kv::KeyValueStore;
pub use models::UserProfile;
