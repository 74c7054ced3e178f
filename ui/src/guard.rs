//! Entry guards evaluated before a routed view renders.

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::core::session::{self, TokenStore};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Entry requires a stored session token; otherwise go to `/login`.
    RequireSession,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuardDecision {
    Proceed,
    Redirect(Route),
}

impl Guard {
    pub fn evaluate(&self, store: &dyn TokenStore) -> GuardDecision {
        match self {
            Guard::RequireSession => match session::session_token(store) {
                Ok(Some(_)) => GuardDecision::Proceed,
                Ok(None) => GuardDecision::Redirect(Route::Login {}),
                Err(err) => {
                    warn!("session lookup failed ({err}); treating as signed out");
                    GuardDecision::Redirect(Route::Login {})
                }
            },
        }
    }
}

/// Decision for navigating to `route`. Unguarded routes always proceed.
pub fn decide(route: &Route, store: &dyn TokenStore) -> GuardDecision {
    let decision = route
        .guard()
        .map_or(GuardDecision::Proceed, |guard| guard.evaluate(store));
    debug!("guard {} -> {decision:?}", route.name());
    decision
}

/// Renders `children` only if the guard of `route` lets the navigation
/// through, replacing the history entry with the redirect target otherwise.
#[component]
pub fn Guarded(route: Route, children: Element) -> Element {
    let navigator = use_navigator();
    let store = session::use_token_store();

    match decide(&route, &*store) {
        GuardDecision::Proceed => rsx! { {children} },
        GuardDecision::Redirect(target) => {
            info!("redirecting {route} -> {target}");
            navigator.replace(target);
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::config;
    use crate::core::session::MemoryStore;

    fn with_token(token: &str) -> MemoryStore {
        MemoryStore::with_entry(config().token_key, token)
    }

    #[test]
    fn dashboard_without_token_redirects_to_login() {
        let decision = decide(&Route::Dashboard {}, &MemoryStore::new());
        assert_eq!(decision, GuardDecision::Redirect(Route::Login {}));
    }

    #[test]
    fn dashboard_with_empty_token_redirects_to_login() {
        let decision = decide(&Route::Dashboard {}, &with_token(""));
        assert_eq!(decision, GuardDecision::Redirect(Route::Login {}));
    }

    #[test]
    fn any_non_empty_token_is_accepted() {
        for token in ["x", "expired.jwt.value", "  "] {
            assert_eq!(
                decide(&Route::Dashboard {}, &with_token(token)),
                GuardDecision::Proceed,
                "token {token:?}"
            );
        }
    }

    #[test]
    fn unguarded_routes_ignore_the_store() {
        let store = MemoryStore::new();
        for route in [
            Route::Home {},
            Route::Login {},
            Route::ProjectDetail { id: 3 },
            Route::PageNotFound { segments: vec!["x".into()] },
        ] {
            assert_eq!(decide(&route, &store), GuardDecision::Proceed);
        }
    }

    #[test]
    fn redirect_target_is_the_login_path() {
        let GuardDecision::Redirect(target) = Guard::RequireSession.evaluate(&MemoryStore::new())
        else {
            panic!("expected redirect");
        };
        assert_eq!(target.to_string(), "/login");
    }

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, session::StorageError> {
            Err(session::StorageError::Unavailable("test".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), session::StorageError> {
            Err(session::StorageError::Unavailable("test".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), session::StorageError> {
            Err(session::StorageError::Unavailable("test".into()))
        }
    }

    #[test]
    fn storage_failure_is_treated_as_signed_out() {
        assert_eq!(
            decide(&Route::Dashboard {}, &BrokenStore),
            GuardDecision::Redirect(Route::Login {})
        );
    }

    mod navigation {
        use std::rc::Rc;

        use dioxus::history::{provide_history_context, History, MemoryHistory};
        use dioxus::prelude::*;

        use super::*;
        use crate::core::session::SharedStore;

        #[derive(Clone)]
        struct Harness {
            history: Rc<MemoryHistory>,
            store: SharedStore,
        }

        fn app(props: Harness) -> Element {
            use_context_provider(|| props.store.clone());
            use_hook(|| provide_history_context(props.history.clone()));
            rsx! { Router::<Route> {} }
        }

        /// Path the router settles on after opening `path`.
        fn land_on(path: &str, store: MemoryStore) -> String {
            let history = Rc::new(MemoryHistory::with_initial_path(path));
            let mut dom = VirtualDom::new_with_props(
                app,
                Harness { history: history.clone(), store: SharedStore::new(store) },
            );
            dom.rebuild_in_place();
            history.current_route()
        }

        #[test]
        fn signed_out_visit_to_dashboard_ends_on_login() {
            assert_eq!(land_on("/dashboard", MemoryStore::new()), "/login");
            assert_eq!(land_on("/dashboard", with_token("")), "/login");
        }

        #[test]
        fn signed_in_visit_to_dashboard_stays() {
            assert_eq!(land_on("/dashboard", with_token("abc")), "/dashboard");
        }

        #[test]
        fn unguarded_pages_never_redirect() {
            for path in ["/", "/search", "/project/7", "/login", "/no/such/page"] {
                assert_eq!(land_on(path, MemoryStore::new()), path);
            }
        }
    }
}
