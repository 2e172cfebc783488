//! Client-side form validation.
//!
//! Runs before any network call. Fields are checked in form order and the
//! first failure wins. Values are trimmed only for the emptiness check; the
//! credentials sent to the API keep what the user typed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{LoginCredentials, RegisterCredentials};

pub const MIN_PASSWORD_CHARS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter a username")]
    MissingUsername,
    #[error("Enter an email")]
    MissingEmail,
    #[error("Enter a password")]
    MissingPassword,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// # Errors
///
/// Returns the first missing field.
pub fn validate_login(username: &str, password: &str) -> Result<LoginCredentials, ValidationError> {
    require(username, ValidationError::MissingUsername)?;
    require(password, ValidationError::MissingPassword)?;
    Ok(LoginCredentials { username: username.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns the first missing field, then `PasswordTooShort` for passwords
/// under [`MIN_PASSWORD_CHARS`] characters.
pub fn validate_register(username: &str, email: &str, password: &str) -> Result<RegisterCredentials, ValidationError> {
    require(username, ValidationError::MissingUsername)?;
    require(email, ValidationError::MissingEmail)?;
    require(password, ValidationError::MissingPassword)?;
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(RegisterCredentials { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn require(value: &str, missing: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() { Err(missing) } else { Ok(()) }
}
