//! Transient toast notices raised by the API client and by views.

use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const DISMISS_AFTER_MS: u64 = 3_000;
/// Older toasts are dropped beyond this many.
pub const MAX_VISIBLE: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl Notices {
    /// Queue a notice and return the id of its toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            timestamp: api::dates::current_date("HH:mm:ss"),
            level: notice.level,
            message: notice.message,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

#[component]
pub fn ToastStack() -> Element {
    let notices = use_notices();
    let toasts = notices().toasts;

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut notices = use_notices();
    let id = toast.id;

    #[cfg(target_arch = "wasm32")]
    use_future(move || async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS)).await;
        notices.write().dismiss(id);
    });

    rsx! {
        div {
            class: match toast.level {
                NoticeLevel::Error => "toast error",
                NoticeLevel::Warning => "toast warning",
                NoticeLevel::Success => "toast success",
                NoticeLevel::Info => "toast info",
            },
            onclick: move |_| notices.write().dismiss(id),
            span { class: "toast-time", "{toast.timestamp}" }
            span { " {toast.message}" }
        }
    }
}
