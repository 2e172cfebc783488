//! Route-guard middleware for page requests.
//!
//! Reads only the `accessToken` cookie and applies
//! [`client::guard::evaluate`]. Stateless; no session lookup, no network.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::guard::{self, GuardDecision};
use client::util::cookie::ACCESS_TOKEN_COOKIE;

pub async fn route_guard(jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    if !guard::is_guarded(&path) {
        return next.run(request).await;
    }

    let token = jar.get(ACCESS_TOKEN_COOKIE).map(Cookie::value);
    match guard::evaluate(guard::has_access_token(token), &path) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::debug!(%path, %target, "route guard redirect");
            Redirect::temporary(target).into_response()
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
