use dioxus::prelude::*;

use crate::core::project::ProjectCategory;
use crate::routes::Route;
use crate::t;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "page page-projects",
            div { class: "page__header",
                h1 { {t!("projects-title")} }
                Link { class: "button button--primary", to: Route::CreateProject {}, {t!("projects-new")} }
            }
            for category in ProjectCategory::ALL {
                div { key: "{category}", class: "projects__group",
                    h2 { "{category.label()}" }
                    p { class: "page__placeholder", {t!("projects-empty")} }
                }
            }
        }
    }
}
