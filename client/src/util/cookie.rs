//! `accessToken` cookie strings in `document.cookie` format.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const ACCESS_TOKEN_MAX_AGE: Duration = Duration::days(7);

/// Cookie mirroring `token` for the route guard: `Path=/`, seven days.
pub fn access_token_cookie(token: &str) -> String {
    Cookie::build((ACCESS_TOKEN_COOKIE, token))
        .path("/")
        .max_age(ACCESS_TOKEN_MAX_AGE)
        .build()
        .to_string()
}

/// Removal cookie: empty value with an expiry at the Unix epoch.
pub fn expired_access_token_cookie() -> String {
    Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
        .to_string()
}

/// Value of cookie `name` in a `Cookie`/`document.cookie` header string.
/// Empty values are treated as missing.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}
