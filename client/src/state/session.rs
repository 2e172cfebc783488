//! The explicit session object handed to pages through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` owns both stores and the in-memory `AuthState`. `establish` is
//! the single write path used by login and register; `logout` is the single
//! clear path. The route guard reads only the cookie, so these two methods
//! are where cookie and storage are kept in step.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::AuthState;
use super::storage::{CookieStore, DocumentCookies, KeyValueStore, LocalStorage};
use crate::guard::{CHAT_PATH, LOGIN_PATH};
use crate::net::types::TokenPair;
use crate::util::cookie::{ACCESS_TOKEN_COOKIE, access_token_cookie, expired_access_token_cookie};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Session backed by the real browser stores.
pub type BrowserSession = Session<LocalStorage, DocumentCookies>;

#[derive(Clone, Debug)]
pub struct Session<S, C> {
    storage: S,
    cookies: C,
    state: AuthState,
}

impl<S: KeyValueStore, C: CookieStore> Session<S, C> {
    /// Rebuild the session from persistent storage.
    ///
    /// Storage is authoritative: an `accessToken` cookie left behind after
    /// storage was cleared is expired here so the route guard stops treating
    /// the browser as signed in.
    pub fn restore(storage: S, cookies: C) -> Self {
        let access = stored_token(&storage, ACCESS_TOKEN_KEY);
        let refresh = stored_token(&storage, REFRESH_TOKEN_KEY);
        if access.is_none() && cookies.get(ACCESS_TOKEN_COOKIE).is_some() {
            cookies.write(&expired_access_token_cookie());
        }
        Self { state: AuthState::from_stored(access, refresh), storage, cookies }
    }

    /// Persist a freshly issued token pair and mark the session signed in.
    pub fn establish(&mut self, tokens: &TokenPair) {
        self.storage.set(ACCESS_TOKEN_KEY, &tokens.access);
        self.storage.set(REFRESH_TOKEN_KEY, &tokens.refresh);
        self.cookies.write(&access_token_cookie(&tokens.access));
        self.state = AuthState::signed_in(tokens);
    }

    /// Forget both tokens everywhere.
    pub fn logout(&mut self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.cookies.write(&expired_access_token_cookie());
        self.state = AuthState::default();
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn access_token(&self) -> Option<&str> {
        self.state.access_token.as_deref()
    }

    /// Where the `/` bootstrap page sends the user: `/chat` when an access
    /// token is persisted, `/login` otherwise. Reads storage directly.
    pub fn landing_path(&self) -> &'static str {
        if stored_token(&self.storage, ACCESS_TOKEN_KEY).is_some() { CHAT_PATH } else { LOGIN_PATH }
    }
}

/// Stored token under `key`; an empty string counts as no token.
fn stored_token<S: KeyValueStore>(storage: &S, key: &str) -> Option<String> {
    storage.get(key).filter(|token| !token.is_empty())
}
