//! REST client for the authentication API.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an `AuthError` whose `Display` is the message shown
//! under the form. Server rejections carry the message extracted from the
//! response body; transport failures and malformed success bodies display
//! a fixed per-operation message and keep the underlying cause in `detail`.
//! Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, Transport};
use super::types::{CreatedChat, LoginCredentials, NewChat, RegisterCredentials, TokenPair};

/// Origin of the authentication API. Not configurable.
pub const API_BASE: &str = "http://127.0.0.1:8000";

const LOGIN_ENDPOINT: &str = "/api/v1/auth/login/";
const REGISTER_ENDPOINT: &str = "/api/v1/auth/register/";
const CHATS_ENDPOINT: &str = "/api/v1/chats/";

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const CREATE_CHAT_FAILED: &str = "Failed to create chat";

/// Register-form fields whose first validation error is surfaced, in order.
const REGISTER_ERROR_FIELDS: [&str; 3] = ["username", "email", "password"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    /// No usable response: network failure or an unexpected body shape.
    #[error("{message}")]
    Transport { message: &'static str, detail: String },
}

/// Client for the three auth API operations.
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    base: String,
    transport: T,
}

impl<T: Transport> AuthClient<T> {
    /// Client bound to [`API_BASE`].
    pub fn new(transport: T) -> Self {
        Self::with_base(API_BASE, transport)
    }

    pub fn with_base(base: &str, transport: T) -> Self {
        Self { base: base.trim_end_matches('/').to_owned(), transport }
    }

    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    ///
    /// `Rejected` with the server's `detail` or first `non_field_errors`
    /// entry, else the generic login message.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenPair, AuthError> {
        let resp = self.post(LOGIN_ENDPOINT, None, credentials, LOGIN_FAILED).await?;
        if !resp.ok() {
            return Err(AuthError::Rejected(login_error_message(&resp.body)));
        }
        decode(&resp.body, LOGIN_FAILED)
    }

    /// Create an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// `Rejected` with the first `username`, `email` or `password` field
    /// error, else the generic registration message.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<(), AuthError> {
        let resp = self.post(REGISTER_ENDPOINT, None, credentials, REGISTRATION_FAILED).await?;
        if !resp.ok() {
            return Err(AuthError::Rejected(register_error_message(&resp.body)));
        }
        Ok(())
    }

    /// Create the first chat for a freshly signed-in user.
    ///
    /// # Errors
    ///
    /// `Rejected` with the generic create-chat message on any non-success
    /// status; the body is not inspected.
    pub async fn create_chat(&self, access_token: &str, title: &str) -> Result<CreatedChat, AuthError> {
        let body = NewChat { title };
        let resp = self.post(CHATS_ENDPOINT, Some(access_token), &body, CREATE_CHAT_FAILED).await?;
        if !resp.ok() {
            return Err(AuthError::Rejected(CREATE_CHAT_FAILED.to_owned()));
        }
        decode(&resp.body, CREATE_CHAT_FAILED)
    }

    async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        bearer: Option<&str>,
        body: &B,
        fallback: &'static str,
    ) -> Result<ApiResponse, AuthError> {
        let body = serde_json::to_value(body).map_err(|e| transport_error(fallback, e))?;
        let request = ApiRequest { url: format!("{}{endpoint}", self.base), bearer: bearer.map(str::to_owned), body };
        self.transport.post_json(request).await.map_err(|e| transport_error(fallback, e))
    }
}

fn transport_error(message: &'static str, detail: impl ToString) -> AuthError {
    AuthError::Transport { message, detail: detail.to_string() }
}

fn decode<R: DeserializeOwned>(body: &str, fallback: &'static str) -> Result<R, AuthError> {
    serde_json::from_str(body).map_err(|e| transport_error(fallback, e))
}

/// Message for a rejected login: `detail`, then `non_field_errors[0]`.
pub(crate) fn login_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return LOGIN_FAILED.to_owned();
    };
    non_empty_str(value.get("detail"))
        .or_else(|| first_entry(value.get("non_field_errors")))
        .unwrap_or(LOGIN_FAILED)
        .to_owned()
}

/// Message for a rejected registration: first field error by priority.
pub(crate) fn register_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return REGISTRATION_FAILED.to_owned();
    };
    REGISTER_ERROR_FIELDS
        .iter()
        .find_map(|field| first_entry(value.get(field)))
        .unwrap_or(REGISTRATION_FAILED)
        .to_owned()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

fn first_entry(value: Option<&Value>) -> Option<&str> {
    non_empty_str(value?.as_array()?.first())
}
