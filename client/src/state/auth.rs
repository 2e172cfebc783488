//! Auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rebuilt from `localStorage` when the app starts and changed only by the
//! session's `establish`/`logout`. Never refreshed in the background.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::TokenPair;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl AuthState {
    /// State recovered from storage. Authenticated only when both tokens
    /// are present and non-empty; a lone token is ignored.
    pub fn from_stored(access: Option<String>, refresh: Option<String>) -> Self {
        let non_empty = |token: Option<String>| token.filter(|t| !t.is_empty());
        match (non_empty(access), non_empty(refresh)) {
            (Some(access), Some(refresh)) => Self::signed_in(&TokenPair { access, refresh }),
            _ => Self::default(),
        }
    }

    pub fn signed_in(tokens: &TokenPair) -> Self {
        Self {
            is_authenticated: true,
            access_token: Some(tokens.access.clone()),
            refresh_token: Some(tokens.refresh.clone()),
        }
    }
}
