//! Route table.
//!
//! [`ROUTE_TABLE`] is the declarative list of navigation targets; [`Route`] is
//! the same table in the form the Dioxus router consumes. The two are kept in
//! lock-step by the tests at the bottom of this file.

use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::guard::{Guard, Guarded};
use crate::views::{
    About, Blog, CreateProject, Dashboard, Home, Login, PageNotFound, ProjectDetail, Projects,
    Search, SinglePage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// URL pattern; `:name` marks a parameter segment.
    pub path: &'static str,
    /// Unique logical identifier.
    pub name: &'static str,
    /// Component rendered for the route; also the `Route` variant name.
    pub view: &'static str,
    pub guard: Option<Guard>,
    /// View module is loaded on first visit.
    pub lazy: bool,
}

pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "home", view: "Home", guard: None, lazy: false },
    RouteEntry { path: "/about", name: "about", view: "About", guard: None, lazy: true },
    RouteEntry { path: "/login", name: "login", view: "Login", guard: None, lazy: false },
    RouteEntry {
        path: "/dashboard",
        name: "dashboard",
        view: "Dashboard",
        guard: Some(Guard::RequireSession),
        lazy: false,
    },
    RouteEntry {
        path: "/single-page",
        name: "SinglePageView",
        view: "SinglePage",
        guard: None,
        lazy: false,
    },
    RouteEntry { path: "/search", name: "search", view: "Search", guard: None, lazy: false },
    RouteEntry {
        path: "/project/:id",
        name: "project-detail",
        view: "ProjectDetail",
        guard: None,
        lazy: false,
    },
    RouteEntry { path: "/projects", name: "projects", view: "Projects", guard: None, lazy: false },
    RouteEntry { path: "/blog", name: "blog", view: "Blog", guard: None, lazy: false },
    RouteEntry {
        path: "/create-project",
        name: "create-project",
        view: "CreateProject",
        guard: None,
        lazy: false,
    },
];

/// Name reported for paths that match no entry.
pub const NOT_FOUND: &str = "not-found";

pub fn find_by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTE_TABLE.iter().find(|entry| entry.name == name)
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/single-page")]
    SinglePage {},
    #[route("/search")]
    Search {},
    #[route("/project/:id")]
    ProjectDetail { id: u64 },
    #[route("/projects")]
    Projects {},
    #[route("/blog")]
    Blog {},
    #[route("/create-project")]
    CreateProject {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home {} => "home",
            Route::About {} => "about",
            Route::Login {} => "login",
            Route::Dashboard {} => "dashboard",
            Route::SinglePage {} => "SinglePageView",
            Route::Search {} => "search",
            Route::ProjectDetail { .. } => "project-detail",
            Route::Projects {} => "projects",
            Route::Blog {} => "blog",
            Route::CreateProject {} => "create-project",
            Route::PageNotFound { .. } => NOT_FOUND,
        }
    }

    /// Table entry for this route; `None` for the not-found fallback.
    pub fn entry(&self) -> Option<&'static RouteEntry> {
        find_by_name(self.name())
    }

    pub fn guard(&self) -> Option<Guard> {
        self.entry().and_then(|entry| entry.guard)
    }
}

/// Layout shared by every route: navbar on top, guarded outlet below.
#[component]
fn AppShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar {}
        main { class: "app-main",
            Guarded { route: route,
                Outlet::<Route> {}
            }
        }
    }
}
