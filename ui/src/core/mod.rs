//! Platform-agnostic building blocks shared by the views.

pub mod config;
pub mod project;
pub mod session;
