//! Client actions against canned responses

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::MockServer;

use crate::common::{mock_json, session_for};
use devconnect::client::ProfileSlot;
use devconnect::shared::{LoginRequest, ProfileRequest, RegisterRequest};

#[tokio::test]
async fn test_register_errors_are_stored() {
    let server = MockServer::start().await;
    mock_json(&server, "POST", "/api/users/register", 400, json!({ "email": "Email already exists" })).await;

    let mut session = session_for(server.uri());
    session.register_user(RegisterRequest::default()).await;

    assert_eq!(session.state().errors.get("email"), Some("Email already exists"));
    assert_eq!(session.navigator.current(), None);
}

#[tokio::test]
async fn test_login_with_unreadable_token_stays_logged_out() {
    let server = MockServer::start().await;
    mock_json(&server, "POST", "/api/users/login", 200, json!({ "success": true, "token": "Bearer junk" })).await;

    let mut session = session_for(server.uri());
    session.login_user(LoginRequest::default()).await;

    assert!(!session.state().auth.is_authenticated);
    assert!(session.state().errors.is_empty());
}

#[tokio::test]
async fn test_empty_current_profile() {
    let server = MockServer::start().await;
    mock_json(&server, "GET", "/api/profile", 200, json!({})).await;

    let mut session = session_for(server.uri());
    session.get_current_profile().await;

    assert_eq!(session.state().profile.profile, ProfileSlot::Empty);
    assert!(!session.state().profile.loading);
}

#[tokio::test]
async fn test_create_profile_errors_keep_route() {
    let server = MockServer::start().await;
    mock_json(&server, "POST", "/api/profile", 400, json!({ "handle": "That handle already exists" })).await;

    let mut session = session_for(server.uri());
    session.create_profile(ProfileRequest::default()).await;

    assert_eq!(session.state().errors.get("handle"), Some("That handle already exists"));
    assert_eq!(session.navigator.current(), None);
}

#[tokio::test]
async fn test_server_error_uses_error_key() {
    let server = MockServer::start().await;
    mock_json(&server, "DELETE", "/api/profile", 500, json!({ "error": "Server error", "status": 500 })).await;

    let mut session = session_for(server.uri());
    session.delete_account(|_| true).await;

    assert_eq!(session.state().errors.get("error"), Some("Server error"));
}
