//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the single [`ApiClient`] for the app, wires its
//! notices and redirects into signals, and mirrors the [`Session`] into a
//! `Signal<SessionState>` so views re-render on login and logout.

use std::rc::Rc;

use api::{ApiClient, ClientHooks, Notice, ReqwestTransport, Session, SessionState};
use dioxus::prelude::*;
use store::config::ApiConfig;
use store::{ClientConfig, KeyValueStore};

use crate::notices::Notices;

pub type Client = ApiClient<ReqwestTransport>;

/// Path the client asked the router to go to. The router layout consumes it.
#[derive(Clone, Copy)]
pub struct PendingRedirect(pub Signal<Option<String>>);

/// [`ClientHooks`] that feed the toast stack and the pending redirect.
#[derive(Clone, Copy)]
pub struct UiHooks {
    notices: Signal<Notices>,
    redirect: Signal<Option<String>>,
}

impl ClientHooks for UiHooks {
    fn notify(&self, notice: Notice) {
        tracing::debug!("notice {:?}: {}", notice.level, notice.message);
        let mut notices = self.notices;
        notices.write().push(notice);
    }

    fn redirect(&self, path: &str) {
        let mut redirect = self.redirect;
        redirect.set(Some(path.to_string()));
    }
}

pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Current session. Updates when the user logs in, logs out or is forced out
/// by a 401.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_pending_redirect() -> PendingRedirect {
    use_context::<PendingRedirect>()
}

pub fn use_app_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component for the client and session. Wrap the router with it.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let notices = use_context_provider(|| Signal::new(Notices::default()));
    let pending = use_context_provider(|| PendingRedirect(Signal::new(None)));
    use_context_provider(|| config.clone());

    let client: Client = use_context_provider(|| {
        let hooks = UiHooks {
            notices,
            redirect: pending.0,
        };
        let session = Session::restore(platform_storage());
        ApiClient::new(
            ReqwestTransport::new(),
            &resolve_api(&config.api),
            session,
            Rc::new(hooks),
        )
    });

    let session_state = use_context_provider(|| Signal::new(client.session().snapshot()));
    use_hook(|| {
        client.session().subscribe(move |state| {
            let mut session_state = session_state;
            session_state.set(state.clone());
        });
    });

    // Validate a persisted token once on startup
    let boot_client = client.clone();
    use_future(move || {
        let client = boot_client.clone();
        async move {
            if client.check_login_status().await {
                tracing::info!("session restored for {}", client.session().snapshot().display_name());
            }
        }
    });

    rsx! {
        {children}
    }
}

fn platform_storage() -> Rc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let storage: Option<Rc<dyn KeyValueStore>> = Some(Rc::new(store::LocalStore::new()));
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    let storage: Option<Rc<dyn KeyValueStore>> = None;
    #[cfg(not(target_arch = "wasm32"))]
    let storage: Option<Rc<dyn KeyValueStore>> = store::FileStore::default_dir()
        .map(|dir| Rc::new(store::FileStore::new(dir)) as Rc<dyn KeyValueStore>);

    storage.unwrap_or_else(|| {
        tracing::warn!("no persistent storage, session will not survive a reload");
        Rc::new(store::MemoryStore::new())
    })
}

/// `reqwest` needs absolute URLs, so a path-only base is joined to the page
/// origin in the browser.
fn resolve_api(api: &ApiConfig) -> ApiConfig {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return ApiConfig {
                base_url: join_origin(&origin, &api.base_url),
                ..api.clone()
            };
        }
    }
    api.clone()
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn join_origin(origin: &str, base_url: &str) -> String {
    if base_url.starts_with('/') {
        format!("{}{}", origin.trim_end_matches('/'), base_url)
    } else {
        base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_origin() {
        assert_eq!(join_origin("http://localhost:8080", "/api"), "http://localhost:8080/api");
        assert_eq!(join_origin("http://localhost:8080/", "/api"), "http://localhost:8080/api");
        assert_eq!(
            join_origin("http://localhost:8080", "https://school.example/api"),
            "https://school.example/api"
        );
    }

    #[test]
    fn test_resolve_keeps_timeout() {
        let api = ApiConfig {
            base_url: "https://school.example/api".into(),
            timeout_ms: 5_000,
        };
        assert_eq!(resolve_api(&api), api);
    }
}
