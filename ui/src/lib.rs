//! Shared UI crate for Void. Routes, the dashboard guard, session storage and
//! every view live here; the platform crates only launch [`Root`].

pub mod bootstrap;
pub mod core;
pub mod guard;
pub mod i18n;
pub mod lazy;
pub mod routes;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

mod root;
pub use root::Root;

pub use routes::Route;
