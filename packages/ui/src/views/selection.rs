use api::models::Id;
use dioxus::prelude::*;

pub fn parse_id(value: &str) -> Option<Id> {
    value.trim().parse().ok()
}

/// Drop-down over `(id, label)` pairs with an empty "nothing selected" entry.
#[component]
pub fn IdSelect(
    placeholder: String,
    options: Vec<(Id, String)>,
    selected: Option<Id>,
    on_select: EventHandler<Option<Id>>,
) -> Element {
    let current = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        select {
            value: "{current}",
            onchange: move |e| on_select.call(parse_id(&e.value())),
            option { value: "", "{placeholder}" }
            for (id, label) in options {
                option { key: "{id}", value: "{id}", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }
}
