use dioxus::prelude::*;

use crate::bootstrap::AppResources;
use crate::core::session::SharedStore;
use crate::i18n;
use crate::routes::Route;

/// Application root: resources first, then the router.
///
/// The routed subtree is keyed by the active language so a language switch
/// remounts every view with fresh strings.
#[component]
pub fn Root(embed_theme: bool) -> Element {
    i18n::init();

    let lang_code = use_signal(|| i18n::FALLBACK_LANGUAGE.to_string());
    use_context_provider(|| lang_code);
    use_context_provider(SharedStore::platform);

    rsx! {
        AppResources { embed_theme: embed_theme }
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}
