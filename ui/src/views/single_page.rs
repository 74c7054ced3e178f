use dioxus::prelude::*;

use crate::t;

#[component]
pub fn SinglePage() -> Element {
    rsx! {
        section { class: "page page-single",
            h1 { {t!("single-title")} }
            p { {t!("single-body")} }
        }
    }
}
