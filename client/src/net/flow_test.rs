use super::*;
use crate::state::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, Session};
use crate::state::storage::{CookieStore, KeyValueStore};
use crate::test_support::{MemoryCookies, MemoryStore, RecordingTransport};
use crate::util::cookie::ACCESS_TOKEN_COOKIE;

fn login() -> LoginCredentials {
    LoginCredentials { username: "alice".to_owned(), password: "secret".to_owned() }
}

fn registration() -> RegisterCredentials {
    RegisterCredentials { username: "alice".to_owned(), email: "a@b.c".to_owned(), password: "secret123".to_owned() }
}

#[tokio::test]
async fn login_persists_tokens_and_creates_chat_with_bearer() {
    let transport = RecordingTransport::default()
        .reply(200, r#"{"access":"A","refresh":"R"}"#)
        .reply(201, r#"{"id":42}"#);
    let client = AuthClient::with_base("http://api.test", &transport);
    let storage = MemoryStore::default();
    let cookies = MemoryCookies::default();
    let mut session = Session::restore(&storage, &cookies);

    let chat = login_and_open_chat(&client, &login(), "Chat 1/2/2026", |tokens| session.establish(tokens))
        .await
        .unwrap();

    assert_eq!(chat, CreatedChat { id: 42 });
    assert_eq!(storage.get(ACCESS_TOKEN_KEY).as_deref(), Some("A"));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY).as_deref(), Some("R"));
    assert_eq!(cookies.get(ACCESS_TOKEN_COOKIE).as_deref(), Some("A"));
    assert!(session.is_authenticated());

    let create = transport.request(1);
    assert_eq!(create.url, "http://api.test/api/v1/chats/");
    assert_eq!(create.authorization().as_deref(), Some("Bearer A"));
    assert_eq!(create.body, serde_json::json!({ "title": "Chat 1/2/2026" }));
}

#[tokio::test]
async fn failed_login_leaves_session_untouched() {
    let transport = RecordingTransport::default().reply(401, r#"{"detail":"bad creds"}"#);
    let client = AuthClient::with_base("http://api.test", &transport);
    let storage = MemoryStore::default();
    let cookies = MemoryCookies::default();
    let mut session = Session::restore(&storage, &cookies);

    let err = login_and_open_chat(&client, &login(), "t", |tokens| session.establish(tokens))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "bad creds");
    assert!(storage.is_empty());
    assert!(cookies.writes.borrow().is_empty());
    assert!(!session.is_authenticated());
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[tokio::test]
async fn create_chat_failure_keeps_established_session() {
    let transport = RecordingTransport::default()
        .reply(200, r#"{"access":"A","refresh":"R"}"#)
        .reply(500, "");
    let client = AuthClient::with_base("http://api.test", &transport);
    let storage = MemoryStore::default();
    let cookies = MemoryCookies::default();
    let mut session = Session::restore(&storage, &cookies);

    let err = login_and_open_chat(&client, &login(), "t", |tokens| session.establish(tokens))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to create chat");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn register_signs_in_with_same_credentials() {
    let transport = RecordingTransport::default()
        .reply(201, r#"{"id":1,"username":"alice"}"#)
        .reply(200, r#"{"access":"A","refresh":"R"}"#)
        .reply(201, r#"{"id":7}"#);
    let client = AuthClient::with_base("http://api.test", &transport);
    let mut established = None;

    let chat = register_and_open_chat(&client, &registration(), "t", |tokens| established = Some(tokens.clone()))
        .await
        .unwrap();

    assert_eq!(chat_path(chat), "/chat/7");
    assert_eq!(established, Some(TokenPair { access: "A".to_owned(), refresh: "R".to_owned() }));
    let login = transport.request(1);
    assert_eq!(login.url, "http://api.test/api/v1/auth/login/");
    assert_eq!(login.body, serde_json::json!({ "username": "alice", "password": "secret123" }));
}

#[tokio::test]
async fn rejected_registration_stops_before_login() {
    let transport = RecordingTransport::default().reply(400, r#"{"email":["Enter a valid email address."]}"#);
    let client = AuthClient::with_base("http://api.test", &transport);

    let err = register_and_open_chat(&client, &registration(), "t", |_| panic!("must not establish"))
        .await
        .unwrap_err();

    assert_eq!(err, AuthError::Rejected("Enter a valid email address.".to_owned()));
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn chat_title_prefixes_date() {
    assert_eq!(chat_title("19.10.2026"), "Chat 19.10.2026");
}
