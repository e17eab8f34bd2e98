use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, BASE, StubTransport};
use crate::net::types::{Session, UserRole};
use crate::util::storage::MemoryStorage;

fn session(token: &str) -> Session {
    Session {
        token: token.to_owned(),
        user_id: 1,
        email: "ada@example.com".to_owned(),
        role: UserRole::User,
    }
}

// =============================================================
// request assembly
// =============================================================

#[test]
fn request_joins_base_and_path() {
    let stub = StubTransport::new();
    let store = SessionStore::new(Arc::new(MemoryStorage::new()));
    let api = ApiClient::new("http://test.local/api/", stub, store);

    assert_eq!(api.base_url(), "http://test.local/api");
    let req = api.request(Method::Get, "/artworks", RequestBody::Empty);
    assert_eq!(req.url, "http://test.local/api/artworks");
    let req = api.request(Method::Get, "carts", RequestBody::Empty);
    assert_eq!(req.url, "http://test.local/api/carts");
}

#[test]
fn no_authorization_header_without_token() {
    let (_, api) = test_support::client();
    let req = api.request(Method::Get, "/artworks", RequestBody::Empty);
    assert_eq!(req.header("authorization"), None);
}

#[test]
fn bearer_header_follows_session() {
    let (stub, api) = test_support::client();
    api.session().persist(&session("tok-9")).unwrap();

    block_on(api.send_empty(Method::Delete, "/artworks/3")).unwrap();
    assert_eq!(stub.last().header("Authorization"), Some("Bearer tok-9"));

    api.session().clear();
    block_on(api.send_empty(Method::Delete, "/artworks/3")).unwrap();
    assert_eq!(stub.last().header("Authorization"), None);
}

// =============================================================
// response handling
// =============================================================

#[test]
fn non_success_status_maps_to_http_error() {
    let (stub, api) = test_support::client();
    stub.respond(403, r#"{"status":403,"message":"Forbidden"}"#);

    let err = block_on(api.get_json::<serde_json::Value>("/users")).unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Forbidden");
}

#[test]
fn transport_error_passes_through() {
    let (stub, api) = test_support::client();
    stub.fail(ApiError::Transport("offline".to_owned()));

    let err = block_on(api.send_empty(Method::Post, "/carts")).unwrap_err();
    assert_eq!(err, ApiError::Transport("offline".to_owned()));
}

#[test]
fn malformed_json_is_decode_error() {
    let (stub, api) = test_support::client();
    stub.respond(200, "not json");

    let err = block_on(api.get_json::<Vec<u32>>("/artworks")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn send_json_encodes_body() {
    let (stub, api) = test_support::client();
    stub.respond(200, "[1,2]");

    let got: Vec<u32> = block_on(api.send_json(Method::Post, "/things", &serde_json::json!({"a": 1}))).unwrap();
    assert_eq!(got, vec![1, 2]);
    let req = stub.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, format!("{BASE}/things"));
    assert_eq!(req.body, RequestBody::Json(r#"{"a":1}"#.to_owned()));
}

#[test]
fn optional_json_is_none_on_empty_body() {
    let (stub, api) = test_support::client();
    stub.respond(204, "");

    let got: Option<Vec<u32>> = block_on(api.send_optional_json(Method::Put, "/x", &1)).unwrap();
    assert_eq!(got, None);
}

#[test]
fn send_text_returns_raw_body() {
    let (stub, api) = test_support::client();
    stub.respond(200, "Verification code sent");

    let got = block_on(api.send_text(Method::Post, "/x", &1)).unwrap();
    assert_eq!(got, "Verification code sent");
}

#[test]
fn path_segment_escapes_reserved_characters() {
    assert_eq!(path_segment("a+b@example.com"), "a%2Bb%40example.com");
    assert_eq!(path_segment("plain"), "plain");
}
