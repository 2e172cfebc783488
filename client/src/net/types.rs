//! Wire types exchanged with the authentication API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/v1/auth/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterCredentials {
    /// Credentials for the automatic sign-in that follows registration.
    pub fn login(&self) -> LoginCredentials {
        LoginCredentials { username: self.username.clone(), password: self.password.clone() }
    }
}

/// Access/refresh pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Response of `POST /api/v1/chats/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedChat {
    pub id: i64,
}

/// Body of `POST /api/v1/chats/`.
#[derive(Debug, Serialize)]
pub(crate) struct NewChat<'a> {
    pub title: &'a str,
}
