//! Deferred view modules.
//!
//! A [`LazyView`] holds a loader that produces its [`ViewModule`] on first
//! request. Subsequent requests resolve to the very same module; the loader
//! never runs twice.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// A loaded view. `render` must not call hooks: the host component switches
/// between a placeholder and the module once loading completes.
#[derive(Debug)]
pub struct ViewModule {
    pub name: &'static str,
    pub render: fn() -> Element,
}

pub struct LazyView {
    slot: OnceCell<ViewModule>,
    loader: fn() -> ViewModule,
    loads: AtomicUsize,
}

impl LazyView {
    pub const fn new(loader: fn() -> ViewModule) -> Self {
        Self {
            slot: OnceCell::new(),
            loader,
            loads: AtomicUsize::new(0),
        }
    }

    pub async fn load(&'static self) -> &'static ViewModule {
        self.get_or_load()
    }

    pub fn get_or_load(&self) -> &ViewModule {
        self.slot.get_or_init(|| {
            self.loads.fetch_add(1, Ordering::Relaxed);
            let module = (self.loader)();
            debug!("loaded view module {}", module.name);
            module
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// How many times the loader has run (0 or 1).
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}
