use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::core::config::config;
use ui::Root;

fn main() {
    let cfg = config();
    cfg.init_logging();
    info!("{} web starting, mounting on #{}", cfg.app_name, cfg.root_element);

    #[cfg(feature = "web")]
    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(cfg.root_element))
        .launch(App);

    #[cfg(not(feature = "web"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Root { embed_theme: false }
    }
}
