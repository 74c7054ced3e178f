use dioxus::prelude::*;

use crate::core::project::ProjectCategory;
use crate::t;

/// Search box plus category filter. The summary line echoes the active
/// filters; results come from the showcase backend once it is wired in.
#[component]
pub fn Search() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| None::<ProjectCategory>);

    let summary = describe_filters(&query(), category());

    rsx! {
        section { class: "page page-search",
            h1 { {t!("search-title")} }
            form { class: "search__form",
                onsubmit: move |evt: FormEvent| evt.prevent_default(),
                input {
                    class: "search__input",
                    r#type: "search",
                    placeholder: t!("search-placeholder"),
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    class: "search__category",
                    oninput: move |evt| category.set(evt.value().parse().ok()),
                    option { value: "", {t!("search-any-category")} }
                    for c in ProjectCategory::ALL {
                        option { key: "{c}", value: "{c}", "{c.label()}" }
                    }
                }
            }
            p { class: "search__summary", "{summary}" }
        }
    }
}

fn describe_filters(query: &str, category: Option<ProjectCategory>) -> String {
    let query = query.trim();
    match (query.is_empty(), category) {
        (true, None) => t!("search-summary-all"),
        (true, Some(c)) => t!("search-summary-category", category = c.label()),
        (false, None) => t!("search-summary-query", query = query),
        (false, Some(c)) => t!(
            "search-summary-both",
            query = query,
            category = c.label()
        ),
    }
}
