//! HTTP contract tests for [`api::HttpAccountApi`] against a mock account server.

use api::{AccountApi, ApiError, Credentials, HttpAccountApi, ProfileRecord, RegistrationPayload};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "alice@example.com".to_string(),
        password: "Secret123".to_string(),
    }
}

fn sample_profile() -> ProfileRecord {
    ProfileRecord {
        name: "Alice".to_string(),
        age: "30".to_string(),
        gender: "Female".to_string(),
        location: "Paris".to_string(),
        bio: "Hello".to_string(),
        twitter: "alice".to_string(),
        linkedin: String::new(),
        github: "alice-gh".to_string(),
    }
}

#[tokio::test]
async fn test_login_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"email": "alice@example.com", "password": "Secret123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let token = api.login(&credentials()).await.unwrap();
    assert_eq!(token, "tok-1");
}

#[tokio::test]
async fn test_login_without_token_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"msg": "Wrong password"})))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let err = api.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
    assert_eq!(err.server_message(), Some("Wrong password"));
}

#[tokio::test]
async fn test_login_ok_status_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let err = api.login(&credentials()).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingToken { msg: None }));
}

#[tokio::test]
async fn test_login_error_page_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let err = api.login(&credentials()).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_register_sends_full_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "Secret123",
            "age": 30,
            "gender": "Female",
            "location": "Paris",
            "bio": "bio",
            "twitter": "",
            "linkedin": "",
            "github": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let payload = RegistrationPayload {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secret123".to_string(),
        age: 30,
        gender: Some(api::Gender::Female),
        location: "Paris".to_string(),
        bio: "bio".to_string(),
        twitter: String::new(),
        linkedin: String::new(),
        github: String::new(),
    };
    api.register(&payload).await.unwrap();
}

#[tokio::test]
async fn test_register_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"msg": "User already exists"})))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let payload = RegistrationPayload {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secret123".to_string(),
        age: 30,
        gender: None,
        location: String::new(),
        bio: String::new(),
        twitter: String::new(),
        linkedin: String::new(),
        github: String::new(),
    };
    let err = api.register(&payload).await.unwrap_err();
    assert_eq!(err.server_message(), Some("User already exists"));
}

#[tokio::test]
async fn test_fetch_account_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Alice",
            "age": 30,
            "gender": "Female",
            "location": "Paris",
            "bio": "Hello",
            "twitter": "alice",
            "linkedin": "",
            "github": "alice-gh",
            "email": "alice@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let profile = api.fetch_account("tok-1").await.unwrap();
    assert_eq!(profile, sample_profile());
}

#[tokio::test]
async fn test_fetch_account_with_null_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Bob",
            "age": 30,
            "location": null,
            "bio": null
        })))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let profile = api.fetch_account("tok-1").await.unwrap();
    assert_eq!(profile.name, "Bob");
    assert_eq!(profile.location, "");
    assert_eq!(profile.bio, "");
}

#[tokio::test]
async fn test_fetch_account_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"msg": "Token expired"})))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let err = api.fetch_account("stale").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401, .. }));
    assert_eq!(err.server_message(), Some("Token expired"));
}

#[tokio::test]
async fn test_update_account_returns_server_copy() {
    let server = MockServer::start().await;
    let mut normalised = sample_profile();
    normalised.location = "Paris, France".to_string();

    Mock::given(method("POST"))
        .and(path("/update"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(serde_json::to_value(sample_profile()).unwrap()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&normalised))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(format!("{}/", server.uri()));
    let updated = api.update_account("tok-1", &sample_profile()).await.unwrap();
    assert_eq!(updated, normalised);
}

#[tokio::test]
async fn test_update_account_failure_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = HttpAccountApi::new(server.uri());
    let err = api.update_account("tok-1", &sample_profile()).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 500, msg: None }));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Nothing listens on port 9 (discard) on a test host.
    let api = HttpAccountApi::new("http://127.0.0.1:9");
    let err = api.fetch_account("tok").await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.server_message(), None);
}
