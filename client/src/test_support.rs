//! In-memory stand-ins for browser storage and the HTTP transport.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use cookie::Cookie;
use time::OffsetDateTime;

use crate::net::transport::{ApiRequest, ApiResponse, Transport};
use crate::state::storage::{CookieStore, KeyValueStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Applies `document.cookie`-style writes the way a browser would: an
/// expiry in the past or a zero max-age deletes the cookie.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    jar: RefCell<HashMap<String, String>>,
    pub writes: RefCell<Vec<String>>,
}

impl MemoryCookies {
    pub fn with(name: &str, value: &str) -> Self {
        let cookies = Self::default();
        cookies.jar.borrow_mut().insert(name.to_owned(), value.to_owned());
        cookies
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.jar.borrow().get(name).cloned()
    }

    fn write(&self, raw: &str) {
        self.writes.borrow_mut().push(raw.to_owned());
        let parsed = Cookie::parse(raw.to_owned()).expect("test cookie must parse");
        let expired = parsed.expires_datetime().is_some_and(|at| at <= OffsetDateTime::now_utc())
            || parsed.max_age().is_some_and(|age| age.is_zero() || age.is_negative());
        let mut jar = self.jar.borrow_mut();
        if expired {
            jar.remove(parsed.name());
        } else {
            jar.insert(parsed.name().to_owned(), parsed.value().to_owned());
        }
    }
}

/// Replays queued responses and records every request it was given.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, error: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(error.to_owned()));
        self
    }

    pub fn request(&self, index: usize) -> ApiRequest {
        self.requests.borrow()[index].clone()
    }
}

impl Transport for RecordingTransport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses.borrow_mut().pop_front().expect("unexpected request: no queued response")
    }
}
