use dioxus::prelude::*;

use crate::t;

#[component]
pub fn Blog() -> Element {
    rsx! {
        section { class: "page page-blog",
            h1 { {t!("blog-title")} }
            p { class: "page__placeholder", {t!("blog-empty")} }
        }
    }
}
