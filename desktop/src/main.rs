#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::core::config::config;
use ui::Root;

#[cfg(feature = "desktop")]
fn main() {
    let cfg = config();
    cfg.init_logging();
    info!("{} desktop starting", cfg.app_name);

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("{} – v{}", cfg.app_name, env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    config().init_logging();
    info!("{} desktop server starting", config().app_name);
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    // No asset server in packaged builds; the theme is inlined.
    rsx! {
        Root { embed_theme: true }
    }
}
