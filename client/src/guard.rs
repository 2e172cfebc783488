//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated by the SSR host for every page request and by the router for
//! client-side navigations. The decision depends only on whether the
//! `accessToken` cookie is present and on the target path; it never touches
//! `localStorage` and never makes a network call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const CHAT_PATH: &str = "/chat";

/// Path prefixes the guard never applies to: API calls and static assets.
const UNGUARDED_PREFIXES: [&str; 2] = ["/api/", "/pkg/"];
const UNGUARDED_PATHS: [&str; 3] = ["/api", "/pkg", "/favicon.ico"];

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide whether a navigation to `path` may proceed.
///
/// Signed-in users are bounced off the auth pages to `/`; anonymous users are
/// sent to `/login` from everything except `/`, `/login` and `/register`.
pub fn evaluate(has_access_token: bool, path: &str) -> GuardDecision {
    let auth_page = path == LOGIN_PATH || path == REGISTER_PATH;
    if has_access_token && auth_page {
        return GuardDecision::Redirect(HOME_PATH);
    }
    if !has_access_token && !auth_page && path != HOME_PATH {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    GuardDecision::Allow
}

/// Whether the guard runs for `path` at all.
pub fn is_guarded(path: &str) -> bool {
    !UNGUARDED_PATHS.contains(&path) && !UNGUARDED_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// An empty cookie value counts as no token.
pub fn has_access_token(cookie_value: Option<&str>) -> bool {
    cookie_value.is_some_and(|value| !value.is_empty())
}
