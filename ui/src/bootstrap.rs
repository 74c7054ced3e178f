//! Static styling and scripting resources registered before the router mounts.
//!
//! Order matters: vendor stylesheets first so the local theme can override
//! them, then jQuery, then the plugins that expect a global `jQuery`.

use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Stylesheet,
    Script,
}

#[derive(Debug, Clone)]
pub enum Source {
    Remote(&'static str),
    /// Shipped with the app (`ui/assets`).
    Bundled(Asset),
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub kind: ResourceKind,
    pub name: &'static str,
    pub source: Source,
}

const fn stylesheet(name: &'static str, href: &'static str) -> Resource {
    Resource {
        kind: ResourceKind::Stylesheet,
        name,
        source: Source::Remote(href),
    }
}

const fn script(name: &'static str, href: &'static str) -> Resource {
    Resource {
        kind: ResourceKind::Script,
        name,
        source: Source::Remote(href),
    }
}

pub const RESOURCES: &[Resource] = &[
    stylesheet(
        "bootstrap",
        "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css",
    ),
    stylesheet(
        "bootstrap-slider",
        "https://cdn.jsdelivr.net/npm/bootstrap-slider@11.0.2/dist/css/bootstrap-slider.min.css",
    ),
    stylesheet(
        "font-awesome",
        "https://cdn.jsdelivr.net/npm/font-awesome@4.7.0/css/font-awesome.min.css",
    ),
    stylesheet(
        "slick",
        "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.css",
    ),
    stylesheet(
        "slick-theme",
        "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick-theme.css",
    ),
    stylesheet(
        "nice-select",
        "https://cdn.jsdelivr.net/npm/jquery-nice-select@1.1.0/css/nice-select.css",
    ),
    Resource {
        kind: ResourceKind::Stylesheet,
        name: "theme",
        source: Source::Bundled(THEME_CSS),
    },
    script(
        "jquery",
        "https://cdn.jsdelivr.net/npm/jquery@3.7.1/dist/jquery.min.js",
    ),
    script(
        "popper",
        "https://cdn.jsdelivr.net/npm/popper.js@1.16.1/dist/umd/popper.min.js",
    ),
    script(
        "bootstrap",
        "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/js/bootstrap.min.js",
    ),
    script(
        "bootstrap-slider",
        "https://cdn.jsdelivr.net/npm/bootstrap-slider@11.0.2/dist/bootstrap-slider.min.js",
    ),
    script(
        "tether",
        "https://cdn.jsdelivr.net/npm/tether@1.4.7/dist/js/tether.min.js",
    ),
    script(
        "slick",
        "https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.min.js",
    ),
    script(
        "nice-select",
        "https://cdn.jsdelivr.net/npm/jquery-nice-select@1.1.0/js/jquery.nice-select.min.js",
    ),
];

pub fn stylesheets() -> impl Iterator<Item = &'static Resource> {
    RESOURCES
        .iter()
        .filter(|r| r.kind == ResourceKind::Stylesheet)
}

pub fn scripts() -> impl Iterator<Item = &'static Resource> {
    RESOURCES.iter().filter(|r| r.kind == ResourceKind::Script)
}

/// Head elements for [`RESOURCES`]. With `embed_theme` the bundled theme is
/// inlined instead of linked (native builds without an asset server).
#[component]
pub fn AppResources(embed_theme: bool) -> Element {
    rsx! {
        {stylesheets().map(|res| stylesheet_node(res, embed_theme))}
        {scripts().map(script_node)}
    }
}

fn stylesheet_node(res: &Resource, embed_theme: bool) -> Element {
    match &res.source {
        Source::Remote(href) => rsx! {
            document::Link { rel: "stylesheet", href: *href }
        },
        Source::Bundled(_) if embed_theme => rsx! {
            document::Style { "{THEME_CSS_INLINE}" }
        },
        Source::Bundled(asset) => rsx! {
            document::Link { rel: "stylesheet", href: asset.clone() }
        },
    }
}

fn script_node(res: &Resource) -> Element {
    match &res.source {
        Source::Remote(src) => rsx! {
            document::Script { src: *src }
        },
        Source::Bundled(asset) => rsx! {
            document::Script { src: asset.clone() }
        },
    }
}
