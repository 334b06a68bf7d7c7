use api::guard::{self, LOGIN_PATH};
use dioxus::prelude::*;

use crate::icons::{FaBars, FaRightFromBracket};
use crate::{use_app_config, use_client, use_session, Icon, MenuIcon};

/// Sidebar + header frame around every protected page.
///
/// The web crate passes the current path, a navigation callback and an
/// `Outlet` as children.
#[component]
pub fn AdminShell(
    /// Path of the page being shown, e.g. "/basic/grade".
    active_path: String,
    /// Called with the target path when a menu entry is clicked.
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let session = use_session();
    let config = use_app_config();
    let client = use_client();
    let mut collapsed = use_signal(|| false);

    let sections = guard::menu();
    let page_title = guard::find_route(&active_path)
        .map(|r| r.title)
        .unwrap_or_default();
    let user_name = session().display_name().to_string();

    let logout = move |_| {
        let client = client.clone();
        async move {
            client.user_logout().await;
            on_navigate.call(LOGIN_PATH.to_string());
        }
    };

    rsx! {
        div {
            class: if collapsed() { "admin-shell collapsed" } else { "admin-shell" },

            aside {
                class: "admin-sidebar",
                div { class: "admin-brand", "{config.app.title}" }
                nav {
                    for section in sections {
                        div {
                            class: "menu-section",
                            if let Some(title) = section.title {
                                div { class: "menu-section-title", "{title}" }
                            }
                            for route in section.items {
                                div {
                                    key: "{route.path}",
                                    class: if route.path == active_path { "menu-item active" } else { "menu-item" },
                                    title: "{route.title}",
                                    onclick: move |_| on_navigate.call(route.path.to_string()),
                                    MenuIcon { name: route.icon.unwrap_or_default().to_string() }
                                    span { class: "menu-label", "{route.title}" }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "admin-main",
                header {
                    class: "admin-header",
                    button {
                        class: "icon-button",
                        title: "Toggle menu",
                        onclick: move |_| collapsed.toggle(),
                        Icon { icon: FaBars, width: 16, height: 16 }
                    }
                    h2 { class: "admin-page-title", "{page_title}" }
                    div {
                        class: "admin-user",
                        span { "{user_name}" }
                        button {
                            class: "icon-button",
                            title: "Log out",
                            onclick: logout,
                            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        }
                    }
                }
                main {
                    class: "admin-content",
                    {children}
                }
            }
        }
    }
}
