use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::session;
use crate::routes::Route;
use crate::t;

/// Protected page; only reachable with a stored session token.
#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let store = session::use_token_store();

    let sign_out = move |_| {
        if let Err(err) = session::sign_out(&*store) {
            warn!("sign out failed: {err}");
        }
        info!("signed out");
        navigator.replace(Route::Login {});
    };

    rsx! {
        section { class: "page page-dashboard",
            div { class: "page__header",
                h1 { {t!("dashboard-title")} }
                button { class: "button button--ghost", onclick: sign_out, {t!("dashboard-sign-out")} }
            }
            p { {t!("dashboard-intro")} }
            div { class: "dashboard__actions",
                Link { class: "button button--primary", to: Route::CreateProject {}, {t!("dashboard-new-project")} }
                Link { class: "button button--ghost", to: Route::Projects {}, {t!("dashboard-my-projects")} }
            }
        }
    }
}
