//! Authentication calls under `/auth`.
//!
//! These are the raw endpoints. The session-aware flows built on them
//! (`user_login`, `user_logout`, ...) live on [`ApiClient`] in
//! [`crate::auth`].

use serde::{Deserialize, Serialize};
use store::UserProfile;

use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::session::LoginGrant;
use crate::transport::Transport;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// First problem with the form, if any.
    pub fn validate(&self) -> Option<&'static str> {
        if self.username.trim().is_empty() {
            Some("Please enter a username")
        } else if self.password.trim().is_empty() {
            Some("Please enter a password")
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Reply to `/auth/refresh`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRefresh {
    pub token: String,
    #[serde(default)]
    pub user_info: UserProfile,
}

pub async fn login<T: Transport>(client: &ApiClient<T>, form: &LoginForm) -> Result<LoginGrant, ApiError> {
    client.fetch(ApiRequest::post("/auth/login").json(form)?).await
}

pub async fn logout<T: Transport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    client.execute(ApiRequest::post("/auth/logout")).await
}

/// The server's current view of the logged-in user.
pub async fn current_user<T: Transport>(client: &ApiClient<T>) -> Result<UserProfile, ApiError> {
    client.fetch(ApiRequest::get("/auth/current")).await
}

pub async fn change_password<T: Transport>(client: &ApiClient<T>, change: &PasswordChange) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post("/auth/changePassword").json(change)?)
        .await
}

pub async fn refresh_token<T: Transport>(client: &ApiClient<T>) -> Result<TokenRefresh, ApiError> {
    client.fetch(ApiRequest::post("/auth/refresh")).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_validation() {
        assert_eq!(LoginForm::new(" ", "x").validate(), Some("Please enter a username"));
        assert_eq!(LoginForm::new("admin", "").validate(), Some("Please enter a password"));
        assert!(LoginForm::new("admin", "123456").validate().is_none());
    }

    #[test]
    fn test_password_change_wire_names() {
        let json = serde_json::to_value(PasswordChange {
            old_password: "a".into(),
            new_password: "b".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"oldPassword": "a", "newPassword": "b"}));
    }
}
