//! Pieces shared by the list pages.

use api::models::RecordStatus;
use api::Page;
use dioxus::prelude::*;

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("auto-confirming: {}", message);
        true
    }
}

/// "Page 2 of 5 (43 records)" with previous/next buttons.
#[component]
pub fn Pager(current: u32, pages: u64, total: u64, on_change: EventHandler<u32>) -> Element {
    let page = Page::<()> {
        records: Vec::new(),
        total,
        current,
        size: 0,
        pages,
    };
    let shown_pages = pages.max(1);

    rsx! {
        div {
            class: "pager",
            button {
                disabled: !page.has_previous(),
                onclick: move |_| on_change.call(current.saturating_sub(1).max(1)),
                "Previous"
            }
            span { "Page {current} of {shown_pages} ({total} records)" }
            button {
                disabled: !page.has_next(),
                onclick: move |_| on_change.call(current + 1),
                "Next"
            }
        }
    }
}

#[component]
pub fn StatusTag(status: RecordStatus) -> Element {
    rsx! {
        span {
            class: if status.is_enabled() { "tag enabled" } else { "tag disabled" },
            "{status}"
        }
    }
}

/// Text shown in place of a list that failed to load. The client has already
/// raised a toast for the error itself.
#[component]
pub fn LoadFailed() -> Element {
    rsx! {
        p { class: "empty", "Could not load data." }
    }
}

/// Search box that reports its value on Enter or when the button is clicked.
#[component]
pub fn SearchBar(
    #[props(default = "Search".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut text = use_signal(String::new);

    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        on_search.call(text());
                    }
                },
            }
            button { onclick: move |_| on_search.call(text()), "Search" }
        }
    }
}
