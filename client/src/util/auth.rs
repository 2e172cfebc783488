//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side navigations never reach the SSR host, so the router re-applies
//! the same guard decision on every location change.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{self, GuardDecision};
use crate::state::storage::{CookieStore, DocumentCookies};
use crate::util::cookie::ACCESS_TOKEN_COOKIE;

/// Redirect whenever the guard rejects the current path.
pub fn install_route_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        if !guard::is_guarded(&path) {
            return;
        }
        let token = CookieStore::get(&DocumentCookies, ACCESS_TOKEN_COOKIE);
        if let GuardDecision::Redirect(target) = guard::evaluate(guard::has_access_token(token.as_deref()), &path) {
            navigate(target, replace());
        }
    });
}

/// Renders nothing; mounts the client-side guard inside the router.
#[component]
pub fn RouteGuard() -> impl IntoView {
    install_route_guard(use_navigate());
}

/// Navigation options that replace the current history entry.
pub fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}
