//! Sign-in sequences driven by the login and register forms.
//!
//! Both forms end the same way: obtain tokens, hand them to the session,
//! create the user's first chat with the new access token, and report the
//! chat so the page can navigate to it.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use super::api::{AuthClient, AuthError};
use super::transport::Transport;
use super::types::{CreatedChat, LoginCredentials, RegisterCredentials, TokenPair};

/// Log in, establish the session via `establish`, then open a chat.
///
/// # Errors
///
/// Stops at the first failing call. A create-chat failure happens after
/// `establish` ran, so the session stays signed in.
pub async fn login_and_open_chat<T, F>(
    client: &AuthClient<T>,
    credentials: &LoginCredentials,
    chat_title: &str,
    establish: F,
) -> Result<CreatedChat, AuthError>
where
    T: Transport,
    F: FnOnce(&TokenPair),
{
    let tokens = client.login(credentials).await?;
    establish(&tokens);
    client.create_chat(&tokens.access, chat_title).await
}

/// Register, sign in with the same credentials, then open a chat.
///
/// # Errors
///
/// Stops at the first failing call; see [`login_and_open_chat`].
pub async fn register_and_open_chat<T, F>(
    client: &AuthClient<T>,
    credentials: &RegisterCredentials,
    chat_title: &str,
    establish: F,
) -> Result<CreatedChat, AuthError>
where
    T: Transport,
    F: FnOnce(&TokenPair),
{
    client.register(credentials).await?;
    login_and_open_chat(client, &credentials.login(), chat_title, establish).await
}

pub fn chat_title(date_label: &str) -> String {
    format!("Chat {date_label}")
}

pub fn chat_path(chat: CreatedChat) -> String {
    format!("/chat/{}", chat.id)
}

/// Today's date in the browser's locale.
#[cfg(feature = "hydrate")]
pub fn today_label() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}
