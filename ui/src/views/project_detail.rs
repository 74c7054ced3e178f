use dioxus::prelude::*;

use crate::routes::Route;
use crate::t;

#[component]
pub fn ProjectDetail(id: u64) -> Element {
    rsx! {
        section { class: "page page-project",
            h1 { {t!("project-detail-title", id = id)} }
            p { class: "page__placeholder", {t!("project-detail-body")} }
            Link { class: "button button--ghost", to: Route::Projects {}, {t!("project-detail-back")} }
        }
    }
}
