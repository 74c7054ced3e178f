use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::core::session;
use crate::routes::Route;
use crate::t;

/// Sign-in page. Accepts an access token issued by the showcase backend and
/// stores it where the dashboard guard looks for it.
#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let store = session::use_token_store();
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let value = token().trim().to_string();
        if value.is_empty() {
            error.set(Some(t!("login-error-empty")));
            return;
        }
        match session::store_token(&*store, &value) {
            Ok(()) => {
                info!("session token stored");
                navigator.push(Route::Dashboard {});
            }
            Err(err) => {
                warn!("could not store session token: {err}");
                error.set(Some(t!("login-error-storage")));
            }
        }
    };

    rsx! {
        section { class: "page page-login",
            h1 { {t!("login-title")} }
            p { {t!("login-intro")} }
            form { class: "login__form", onsubmit: on_submit,
                label { r#for: "login-token", {t!("login-token-label")} }
                input {
                    id: "login-token",
                    r#type: "password",
                    autocomplete: "off",
                    value: "{token}",
                    oninput: move |evt| token.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form__error", role: "alert", "{message}" }
                }
                button { class: "button button--primary", r#type: "submit", {t!("login-submit")} }
            }
        }
    }
}
