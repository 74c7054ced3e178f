use dioxus::prelude::*;

use crate::routes::Route;
use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }

            ul { class: "page-home__features",
                li { {t!("home-feature-browse")} }
                li { {t!("home-feature-feedback")} }
                li { {t!("home-feature-share")} }
            }
            div { class: "page-home__cta",
                Link { class: "button button--primary", to: Route::Projects {}, {t!("home-cta-browse")} }
                Link { class: "button button--ghost", to: Route::CreateProject {}, {t!("home-cta-create")} }
            }
        }
    }
}
