use crate::core::config::config;
use crate::i18n;
use crate::routes::Route;
use crate::t;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header: brand, primary navigation and the locale switcher.
///
/// The language selector writes the global language code signal provided by
/// [`crate::Root`]; the keyed subtree there remounts every view afterwards.
#[component]
pub fn AppNavbar() -> Element {
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("language switch to {val} failed: {err}"),
        }
    };

    let brand = config().app_name;

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    Link { class: "navbar__brand-link", to: Route::Home {},
                        span { class: "navbar__brand-mark", "{brand}" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    Link { class: "navbar__link", to: Route::Home {}, {t!("nav-home")} }
                    Link { class: "navbar__link", to: Route::Projects {}, {t!("nav-projects")} }
                    Link { class: "navbar__link", to: Route::Search {}, {t!("nav-search")} }
                    Link { class: "navbar__link", to: Route::Blog {}, {t!("nav-blog")} }
                    Link { class: "navbar__link", to: Route::About {}, {t!("nav-about")} }
                    Link { class: "navbar__link", to: Route::Login {}, {t!("nav-login")} }
                    Link { class: "navbar__link navbar__link--accent", to: Route::Dashboard {},
                        {t!("nav-dashboard")}
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
