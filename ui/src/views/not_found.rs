use dioxus::prelude::*;

use crate::routes::Route;
use crate::t;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path)} }
            Link { class: "button button--ghost", to: Route::Home {}, {t!("not-found-home")} }
        }
    }
}
