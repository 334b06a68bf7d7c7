//! # Session flows
//!
//! Login, logout and bootstrap, layered over the raw [`endpoints::auth`]
//! calls and the [`Session`](crate::Session) held by the client.
//!
//! | Flow | Remote call | Session effect |
//! |------|-------------|----------------|
//! | [`ApiClient::user_login`] | `POST /auth/login` | token, profile, roles, permissions stored and persisted |
//! | [`ApiClient::user_logout`] | `POST /auth/logout` (errors ignored) | always cleared, memory and storage |
//! | [`ApiClient::refresh_current_user`] | `GET /auth/current` | profile replaced; logout on failure |
//! | [`ApiClient::check_login_status`] | via `refresh_current_user` | cached profile loaded first |

use crate::client::ApiClient;
use crate::endpoints::{self, auth::LoginForm};
use crate::error::ApiError;
use crate::hooks::Notice;
use crate::transport::Transport;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGGED_OUT: &str = "Logged out";

impl<T: Transport> ApiClient<T> {
    /// Log in and establish the session.
    ///
    /// A rejected login has already been surfaced by the response stage, so
    /// the error is only returned, not notified again. An incomplete form is
    /// reported as a warning without contacting the server.
    pub async fn user_login(&self, form: &LoginForm) -> Result<(), ApiError> {
        if let Some(problem) = form.validate() {
            self.notify(Notice::warning(problem));
            return Err(ApiError::InvalidRequest(problem.to_string()));
        }

        let grant = endpoints::auth::login(self, form).await?;
        tracing::info!("logged in as {}", form.username);
        self.session().establish(grant);
        self.notify(Notice::success(LOGIN_SUCCESS));
        Ok(())
    }

    /// Tell the server, then forget the session whatever it answered.
    pub async fn user_logout(&self) {
        if let Err(e) = endpoints::auth::logout(self).await {
            tracing::error!("logout request failed: {}", e);
        }
        self.session().clear();
        self.notify(Notice::success(LOGGED_OUT));
    }

    /// Re-read the user from the server. Returns whether the session is still
    /// valid.
    pub async fn refresh_current_user(&self) -> bool {
        if !self.session().is_logged_in() {
            return false;
        }

        match endpoints::auth::current_user(self).await {
            Ok(profile) => {
                self.session().apply_current(profile);
                true
            }
            Err(e) => {
                tracing::error!("failed to fetch current user: {}", e);
                // A 401 has already cleared the session in the response stage.
                if self.session().is_logged_in() {
                    self.user_logout().await;
                }
                false
            }
        }
    }

    /// Bootstrap check run once when the app starts.
    pub async fn check_login_status(&self) -> bool {
        if !self.session().is_logged_in() {
            return false;
        }
        self.session().restore_profile();
        self.refresh_current_user().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{harness, ok};
    use crate::hooks::NoticeLevel;
    use crate::transport::TransportError;
    use crate::Session;
    use serde_json::json;
    use std::rc::Rc;
    use store::session::{TOKEN_KEY, USER_INFO_KEY};
    use store::{KeyValueStore, UserProfile};

    fn grant_body() -> serde_json::Value {
        ok(json!({
            "token": "abc",
            "userInfo": {"id": 1, "username": "admin", "realName": "Administrator"},
            "permissions": ["*:*:*"],
            "roles": ["admin"]
        }))
    }

    #[tokio::test]
    async fn test_login_establishes_and_persists() {
        let h = harness();
        h.transport.reply(200, grant_body());

        h.client.user_login(&LoginForm::new("admin", "123456")).await.unwrap();

        let session = h.client.session();
        assert!(session.is_logged_in());
        assert!(session.has_role("admin"));
        assert_eq!(session.snapshot().display_name(), "Administrator");
        assert_eq!(h.storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert!(h.storage.get(USER_INFO_KEY).is_some());
        assert_eq!(h.hooks.messages(NoticeLevel::Success), vec![LOGIN_SUCCESS.to_string()]);
        assert_eq!(h.transport.last().body, Some(json!({"username": "admin", "password": "123456"})));
    }

    #[tokio::test]
    async fn test_rejected_login_notifies_once() {
        let h = harness();
        h.transport.reply(200, json!({"code": 500, "message": "Wrong username or password"}));

        let err = h.client.user_login(&LoginForm::new("admin", "bad")).await.unwrap_err();

        assert_eq!(err.user_message(), "Wrong username or password");
        assert!(!h.client.session().is_logged_in());
        assert_eq!(h.hooks.notices.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_sent() {
        let h = harness();
        assert!(h.client.user_login(&LoginForm::new("admin", "")).await.is_err());
        assert!(h.transport.sent.borrow().is_empty());
        assert_eq!(h.hooks.messages(NoticeLevel::Warning).len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let h = harness();
        h.transport.reply(200, grant_body());
        h.client.user_login(&LoginForm::new("admin", "123456")).await.unwrap();

        h.transport.fail(TransportError::Network("unreachable".into()));
        h.client.user_logout().await;

        assert!(!h.client.session().is_logged_in());
        assert!(h.client.session().profile().is_none());
        assert!(h.storage.get(TOKEN_KEY).is_none());
        assert!(h.storage.get(USER_INFO_KEY).is_none());
        assert_eq!(
            h.hooks.messages(NoticeLevel::Success),
            vec![LOGIN_SUCCESS.to_string(), LOGGED_OUT.to_string()]
        );
    }

    #[tokio::test]
    async fn test_refresh_without_token_is_a_no_op() {
        let h = harness();
        assert!(!h.client.refresh_current_user().await);
        assert!(!h.client.check_login_status().await);
        assert!(h.transport.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_check_login_status_restores_then_refreshes() {
        let h = harness();
        h.storage.set(TOKEN_KEY, "persisted");
        h.storage.set(USER_INFO_KEY, r#"{"username":"cached","realName":"Cached"}"#);
        // Rebuild the client so the session restores from storage.
        let session = Session::restore(Rc::new(h.storage.clone()));
        let client = crate::ApiClient::new(
            h.transport.clone(),
            &store::config::ApiConfig::default(),
            session,
            h.hooks.clone(),
        );
        h.transport.reply(200, ok(json!({"id": 1, "username": "admin", "realName": "Fresh"})));

        assert!(client.check_login_status().await);

        let sent = h.transport.last();
        assert_eq!(sent.url, "/api/auth/current");
        assert_eq!(sent.header("Authorization"), Some("Bearer persisted"));
        let profile = client.session().profile().unwrap();
        assert_eq!(profile.real_name(), Some("Fresh"));
    }

    #[tokio::test]
    async fn test_refresh_failure_logs_out() {
        let h = harness();
        h.transport.reply(200, grant_body());
        h.client.user_login(&LoginForm::new("admin", "123456")).await.unwrap();

        h.transport.reply(200, json!({"code": 500, "message": "Session expired"}));
        h.transport.reply(200, ok(json!(null)));

        assert!(!h.client.refresh_current_user().await);
        assert!(!h.client.session().is_logged_in());
        assert_eq!(h.transport.last().url, "/api/auth/logout");
    }

    #[tokio::test]
    async fn test_refresh_401_does_not_call_logout() {
        let h = harness();
        h.transport.reply(200, grant_body());
        h.client.user_login(&LoginForm::new("admin", "123456")).await.unwrap();

        h.transport.reply(401, json!({}));

        assert!(!h.client.refresh_current_user().await);
        assert!(!h.client.session().is_logged_in());
        assert_eq!(h.transport.last().url, "/api/auth/current");
        assert_eq!(*h.hooks.redirects.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn test_update_profile_merges() {
        let h = harness();
        h.client.session().update_profile(UserProfile::new().with("email", "x@y.z"));
        assert_eq!(
            h.client.session().profile().and_then(|p| p.get("email").cloned()),
            Some(json!("x@y.z"))
        );
    }
}
