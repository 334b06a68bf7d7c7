//! # API crate — REST client for the gradebook backend
//!
//! Everything the UI needs to talk to the server: a typed HTTP client with
//! request/response interceptors, the session it authenticates with, one
//! function per backend endpoint, the route table with its navigation guard,
//! and the school-calendar date helpers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: attaches the bearer token, classifies responses, forces logout on 401 |
//! | [`transport`] | [`Transport`] seam and the `reqwest`-backed [`ReqwestTransport`] |
//! | [`classify`] | Status table from HTTP / envelope codes to user-facing messages |
//! | [`envelope`] | `{code, message, data}` wrapper, [`Page`] and [`PageQuery`] |
//! | [`error`] | [`ApiError`] |
//! | [`session`] | [`Session`]: token, profile, roles and permissions, persisted through `store` |
//! | [`auth`] | Login, logout and bootstrap flows on [`ApiClient`] |
//! | [`hooks`] | [`ClientHooks`]: how the client raises notices and redirects |
//! | [`endpoints`] | Per-resource REST wrappers |
//! | [`models`] | Records exchanged with the backend |
//! | [`guard`] | Route metadata, navigation guard, sidebar menu |
//! | [`dates`] | School year / semester derivation and date formatting |
//!
//! ## Request lifecycle
//!
//! ```text
//! view ──► endpoints::grade::list ──► ApiClient::fetch
//!                                       │ request stage: base URL, JSON, Bearer token
//!                                       ▼
//!                                   Transport::send
//!                                       │ response stage: classify
//!                                       ▼
//!             Ok(data) ◄── code 200 ─┴─ otherwise ──► notice (+ logout & /login on 401) ──► Err
//! ```

pub mod auth;
pub mod classify;
pub mod client;
pub mod dates;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod hooks;
pub mod models;
pub mod session;
pub mod transport;

pub use client::{ApiClient, ApiRequest};
pub use endpoints::auth::{LoginForm, PasswordChange};
pub use envelope::{Envelope, Page, PageQuery};
pub use error::ApiError;
pub use guard::{Navigation, RouteMeta};
pub use hooks::{ClientHooks, Notice, NoticeLevel, TracingHooks};
pub use session::{LoginGrant, Session, SessionState};
pub use transport::{ReqwestTransport, Transport};

pub use store::{ClientConfig, UserProfile};
