//! This crate contains all shared UI for the gradebook admin: the session
//! context, toast notices, the admin shell and one view per page.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod menu_icon;
pub use menu_icon::MenuIcon;

pub mod notices;
pub use notices::{use_notices, Notices, Toast, ToastStack};

mod session;
pub use session::{
    use_app_config, use_client, use_pending_redirect, use_session, Client, PendingRedirect,
    SessionProvider, UiHooks,
};

mod shell;
pub use shell::AdminShell;

pub mod views;

/// Base stylesheet shared by every page.
pub const BASE_CSS: Asset = asset!("/assets/base.css");
