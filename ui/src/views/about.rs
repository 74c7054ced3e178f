use dioxus::prelude::*;

use crate::lazy::{LazyView, ViewModule};
use crate::t;

/// `/about` is split out and loaded on first visit.
pub static ABOUT_VIEW: LazyView = LazyView::new(|| ViewModule {
    name: "about",
    render: about_page,
});

#[component]
pub fn About() -> Element {
    let module = use_resource(|| ABOUT_VIEW.load());

    let loaded = *module.read();
    match loaded {
        Some(loaded) => (loaded.render)(),
        None => rsx! {
            section { class: "page page-about page--loading",
                p { {t!("loading")} }
            }
        },
    }
}

fn about_page() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { {t!("about-title")} }
            p { {t!("about-body-1")} }
            p { {t!("about-body-2")} }
        }
    }
}
