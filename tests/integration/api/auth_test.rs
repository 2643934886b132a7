//! Authentication API integration tests
//!
//! Tests for the `/api/users` endpoints: register, login and current user.

use axum::http::{header::AUTHORIZATION, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{create_logged_in_user, login_user, register_user, TestApp, TEST_PASSWORD};
use devconnect::shared::{CurrentUserResponse, LoginResponse};

#[tokio::test]
async fn test_users_smoke_route() {
    let server = TestApp::without_database();

    let response = server.get("/api/users/test").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "msg": "Users Works Fine" }));
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["email"], "jane@example.com");
    assert!(body["avatar"].as_str().unwrap().contains("gravatar.com/avatar/"));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    let server = app.server();
    register_user(&server, "Jane Doe", "jane@example.com").await;

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "name": "Other Jane",
            "email": "jane@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "email": "Email already exists" }));
}

#[tokio::test]
async fn test_register_validation_errors() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "name": "J",
            "email": "not-an-email",
            "password": "123",
            "password2": "456"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["name"], "Name must be between 2 and 30 characters");
    assert_eq!(body["email"], "Email is invalid");
    assert_eq!(body["password"], "Password must be at least 6 characters");
    assert_eq!(body["password2"], "Passwords must match");
}

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = register_user(&server, "Jane Doe", "jane@example.com").await;

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": "jane@example.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: LoginResponse = response.json();
    assert!(body.success);
    assert!(body.token.starts_with("Bearer "));

    let claims = devconnect::client::state::decode_token(&body.token).unwrap();
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.name, "Jane Doe");
    assert_eq!(claims.avatar, user.avatar);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "email": "User not found" }));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    let server = app.server();
    register_user(&server, "Jane Doe", "jane@example.com").await;

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": "jane@example.com", "password": "wrong-password" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "password": "Incorrect Password" }));
}

#[tokio::test]
async fn test_current_user() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let response = server
        .get("/api/users/current")
        .add_header(AUTHORIZATION, user.auth_header())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: CurrentUserResponse = response.json();
    assert_eq!(body.id, user.id);
    assert_eq!(body.email, user.email);
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server.get("/api/users/current").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .get("/api/users/current")
        .add_header(AUTHORIZATION, axum::http::HeaderValue::from_static("Bearer not.a.token"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let other = devconnect::backend::auth::TokenIssuer::new(
        "some-other-secret",
        devconnect::backend::auth::sessions::DEFAULT_TOKEN_TTL,
    );
    let forged = other
        .issue_bearer(user.id, "Jane Doe", "https://avatar")
        .unwrap();

    let response = server
        .get("/api/users/current")
        .add_header(AUTHORIZATION, axum::http::HeaderValue::from_str(&forged).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_twice_gives_working_tokens() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;
    let second = login_user(&server, &user.email, TEST_PASSWORD).await;

    let response = server
        .get("/api/users/current")
        .add_header(AUTHORIZATION, axum::http::HeaderValue::from_str(&second).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_without_database() {
    let server = TestApp::without_database();

    let response = server
        .post("/api/users/register")
        .json(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}
