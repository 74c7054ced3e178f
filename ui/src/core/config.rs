//! Build-time application configuration.
//!
//! Every value has a compiled default. A handful can be overridden through
//! environment variables read when the crate is compiled (`option_env!`), which
//! is the only configuration channel available to a browser build:
//!
//! | variable         | default        |
//! |------------------|----------------|
//! | `VOID_TOKEN_KEY` | `access_token` |
//! | `VOID_LOG`       | `info`         |
//! | `VOID_ROOT_ID`   | `app`          |

use dioxus::logger::tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Display name used for window titles and the navbar brand.
    pub app_name: &'static str,
    /// Id of the host page element the web build mounts onto.
    pub root_element: &'static str,
    /// Local-storage key holding the session token.
    pub token_key: &'static str,
    /// Raw log level filter (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: &'static str,
}

pub const CONFIG: AppConfig = AppConfig::from_build_env();

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl AppConfig {
    pub const fn from_build_env() -> Self {
        Self {
            app_name: "Void",
            root_element: or_default(option_env!("VOID_ROOT_ID"), "app"),
            token_key: or_default(option_env!("VOID_TOKEN_KEY"), "access_token"),
            log_level: or_default(option_env!("VOID_LOG"), "info"),
        }
    }

    /// Parsed log level; unknown values fall back to `INFO`.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    /// Install the global logger. Safe to call more than once.
    pub fn init_logging(&self) {
        // Err only means a subscriber is already installed.
        let _ = dioxus::logger::init(self.level());
    }
}

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
