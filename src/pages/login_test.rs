use std::cell::RefCell;

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::net::api::ApiError;
use crate::net::types::HttpReply;
use crate::util::storage::{MemoryStorage, StorageError};

struct FakeTransport {
    reply: Result<HttpReply, ApiError>,
    calls: RefCell<Vec<(String, LoginRequest)>>,
}

impl FakeTransport {
    fn replying(status: u16, body: Option<Value>) -> Self {
        Self { reply: Ok(HttpReply { status, body }), calls: RefCell::new(Vec::new()) }
    }

    fn raw(status: u16, raw: &str) -> Self {
        Self { reply: Ok(HttpReply::from_raw(status, raw)), calls: RefCell::new(Vec::new()) }
    }

    fn failing(err: ApiError) -> Self {
        Self { reply: Err(err), calls: RefCell::new(Vec::new()) }
    }
}

impl LoginTransport for FakeTransport {
    async fn post_login(&self, endpoint: &str, request: &LoginRequest) -> Result<HttpReply, ApiError> {
        self.calls.borrow_mut().push((endpoint.to_owned(), request.clone()));
        self.reply.clone()
    }
}

struct FullStorage;

impl KeyValueStore for FullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }
}

/// Drive one submission through the reducer the way `LoginPage` does.
/// Returns the settled state and whether a redirect would follow.
fn run_submission<S: KeyValueStore>(transport: &FakeTransport, store: &S, email: &str, password: &str) -> (LoginState, bool) {
    let state = reduce(LoginState::default(), LoginEvent::EmailInput(email.to_owned()));
    let state = reduce(state, LoginEvent::PasswordInput(password.to_owned()));
    let request = state.login_request();
    let state = reduce(state, LoginEvent::SubmitStarted);
    assert!(state.is_loading);
    assert!(!state.has_error());

    let result = block_on(submit_credentials(transport, store, &LoginConfig::default(), &request));
    let redirect = result.is_ok();
    (reduce(state, LoginEvent::Settled(result)), redirect)
}

#[test]
fn success_stores_user_and_redirects() {
    let transport = FakeTransport::replying(200, Some(json!({ "user": { "id": 1, "name": "A" } })));
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "pw");

    assert!(redirect);
    assert!(!state.is_loading);
    assert!(!state.has_error());
    let stored = store.get("user").unwrap().unwrap();
    assert_eq!(stored, serde_json::to_string(&json!({ "id": 1, "name": "A" })).unwrap());
}

#[test]
fn request_goes_to_login_endpoint_with_trimmed_email() {
    let transport = FakeTransport::replying(200, Some(json!({ "user": { "id": 1 } })));
    let store = MemoryStorage::new();
    run_submission(&transport, &store, "  a@uni.edu  ", " pass word ");

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "/api/auth/login");
    assert_eq!(calls[0].1.email, "a@uni.edu");
    assert_eq!(calls[0].1.password, " pass word ");
}

#[test]
fn rejected_credentials_show_server_message_without_storing() {
    let transport = FakeTransport::replying(
        401,
        Some(json!({ "error": "Invalid credentials", "details": "Password mismatch" })),
    );
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "bad");

    assert!(!redirect);
    assert!(!state.is_loading);
    assert_eq!(state.error_title, "Invalid credentials");
    assert_eq!(state.error_detail, "Password mismatch");
    assert!(store.is_empty());
}

#[test]
fn rejected_with_html_body_uses_fallbacks() {
    let transport = FakeTransport::raw(500, "<h1>Internal Server Error</h1>");
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "pw");

    assert!(!redirect);
    assert_eq!(state.error_title, "Login failed");
    assert_eq!(state.error_detail, "An unexpected error occurred");
}

#[test]
fn unparsable_success_body_is_invalid_response() {
    let transport = FakeTransport::raw(200, "not json");
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "pw");

    assert!(!redirect);
    assert_eq!(state.error_title, "Login failed");
    assert_eq!(state.error_detail, "Invalid response from server");
    assert!(store.is_empty());
}

#[test]
fn success_without_user_is_invalid_response() {
    let transport = FakeTransport::replying(200, Some(json!({})));
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "pw");

    assert!(!redirect);
    assert_eq!(state.error_title, "Login failed");
    assert_eq!(state.error_detail, "Invalid response from server");
    assert!(store.is_empty());
}

#[test]
fn network_failure_reports_server_unavailable() {
    let transport = FakeTransport::failing(ApiError::Network("connection refused".to_owned()));
    let store = MemoryStorage::new();
    let (state, redirect) = run_submission(&transport, &store, "a@uni.edu", "pw");

    assert!(!redirect);
    assert!(!state.is_loading);
    assert_eq!(state.error_title, "Login failed");
    assert_eq!(state.error_detail, "Network error or server is unavailable");
}

#[test]
fn storage_failure_is_reported_like_a_transport_failure() {
    let transport = FakeTransport::replying(200, Some(json!({ "user": { "id": 1 } })));
    let (state, redirect) = run_submission(&transport, &FullStorage, "a@uni.edu", "pw");

    assert!(!redirect);
    assert_eq!(state.error_title, "Login failed");
    assert_eq!(state.error_detail, "Network error or server is unavailable");
}

#[test]
fn custom_config_routes_endpoint_and_storage_key() {
    let transport = FakeTransport::replying(200, Some(json!({ "user": "u-1" })));
    let store = MemoryStorage::new();
    let config = LoginConfig {
        user_storage_key: "session_user".to_owned(),
        ..LoginConfig::with_api_base(Some("https://events.example.edu"))
    };
    let request = LoginRequest::new("a@uni.edu", "pw");

    assert_eq!(block_on(submit_credentials(&transport, &store, &config, &request)), Ok(()));
    assert_eq!(transport.calls.borrow()[0].0, "https://events.example.edu/api/auth/login");
    assert_eq!(store.get("session_user").unwrap().as_deref(), Some("\"u-1\""));
    assert_eq!(store.get("user").unwrap(), None);
}
