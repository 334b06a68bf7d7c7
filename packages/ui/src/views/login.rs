//! Login page view.

use api::LoginForm;
use dioxus::prelude::*;

use crate::{use_app_config, use_client};

/// Username/password form. Calls `on_success` once the session is
/// established; failures are already shown as toasts by the client.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let client = use_client();
    let config = use_app_config();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();
        let client = client.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            let form = LoginForm::new(username().trim(), password());
            let result = client.user_login(&form).await;
            submitting.set(false);
            if result.is_ok() {
                password.set(String::new());
                on_success.call(());
            }
        }
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: onsubmit,
                h1 { "{config.app.title}" }
                label {
                    "Username"
                    input {
                        r#type: "text",
                        name: "username",
                        autocomplete: "username",
                        value: "{username}",
                        oninput: move |e| username.set(e.value()),
                    }
                }
                label {
                    "Password"
                    input {
                        r#type: "password",
                        name: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
