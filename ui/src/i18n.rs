//! Translations for the Void front end.
//!
//! Messages live in `i18n/<locale>/void_ui.ftl`, embedded at compile time.
//! `en-US` is the fallback and reference locale. `ko-KR` must carry every
//! fallback key (see `tests/i18n_missing_keys.rs`).
//!
//! [`init`] picks the best match from the OS locale list on desktop or
//! `navigator.languages` in the browser. The navbar switcher calls
//! [`set_language`] and bumps the language signal provided by `Root`, which
//! re-keys the router subtree so every `t!` lookup renders again.
//!
//! ```ignore
//! let label = t!("nav-home");
//! let heading = t!("project-detail-title", id = 7);
//! ```
use std::sync::Once;

use dioxus::logger::tracing::{info, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
///     t!("nav-home")
///     t!("project-detail-title", id = 7)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain. `fl!` derives the same name from the crate name, so it
/// must stay `void_ui`.
const DOMAIN: &str = "void_ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => info!("i18n selected {selected:?}"),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(available_languages().iter().any(|l| l == "ko-KR"));
    }

    #[test]
    fn every_locale_ships_the_domain_file() {
        for lang in available_languages() {
            let file = format!("{lang}/{DOMAIN}.ftl");
            assert!(Localizations::get(&file).is_some(), "missing {file}");
        }
    }

    #[test]
    fn switching_to_korean_and_back() {
        init();
        set_language("ko-KR").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-login"), "로그인");
        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(fl!(&*LOADER, "nav-login"), "Log in");
    }

    #[test]
    fn invalid_tag_is_ignored() {
        assert!(set_language("not a tag!").is_ok());
    }
}
