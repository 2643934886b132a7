//! Profile API integration tests
//!
//! Tests for the `/api/profile` endpoints, including education and
//! experience entries and account deletion.

use axum::http::{header::AUTHORIZATION, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{create_logged_in_user, TestApp, TestUser};
use devconnect::shared::Profile;

async fn create_profile(server: &TestServer, user: &TestUser, handle: &str) -> Profile {
    let response = server
        .post("/api/profile")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({
            "handle": handle,
            "status": "Developer",
            "skills": "Rust, SQL , ,axum",
            "website": "https://example.com",
            "twitter": "https://twitter.com/example"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

async fn add_education(server: &TestServer, user: &TestUser, school: &str) -> Profile {
    let response = server
        .post("/api/profile/education")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({
            "school": school,
            "degree": "BSc",
            "fieldofstudy": "Computer Science",
            "from": "2010-09-01",
            "to": "2014-06-30"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_current_profile_is_empty_object_before_creation() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let response = server
        .get("/api/profile")
        .add_header(AUTHORIZATION, user.auth_header())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({}));
}

#[tokio::test]
async fn test_create_and_update_profile() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let profile = create_profile(&server, &user, "jane").await;
    assert_eq!(profile.handle, "jane");
    assert_eq!(profile.user.id, user.id);
    assert_eq!(profile.user.name, "Jane Doe");
    assert_eq!(profile.skills, vec!["Rust", "SQL", "axum"]);
    assert_eq!(profile.social.twitter.as_deref(), Some("https://twitter.com/example"));

    let response = server
        .post("/api/profile")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({ "handle": "jane", "status": "Manager", "skills": "Leadership" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Profile = response.json();
    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.status, "Manager");
    assert_eq!(updated.skills, vec!["Leadership"]);
    assert_eq!(updated.website, None);

    let all: Vec<Profile> = server.get("/api/profile/all").await.json();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_profile_validation_errors() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let response = server
        .post("/api/profile")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({ "handle": "j", "status": "", "skills": " , ", "website": "not a url" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["handle"], "Handle needs to be between 2 and 40 characters");
    assert_eq!(body["status"], "Status field is required");
    assert_eq!(body["skills"], "Skills field is required");
    assert_eq!(body["website"], "Not a valid URL");
}

#[tokio::test]
async fn test_handle_must_be_url_safe() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    for handle in ["a/b", "what?", "c#d", "100%dev"] {
        let response = server
            .post("/api/profile")
            .add_header(AUTHORIZATION, user.auth_header())
            .json(&json!({ "handle": handle, "status": "Developer", "skills": "Rust" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "handle": "Handle may only contain letters, numbers, dashes and underscores" })
        );
    }

    let all: Vec<Profile> = server.get("/api/profile/all").await.json();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_handle_is_unique() {
    let app = TestApp::new().await;
    let server = app.server();
    let first = create_logged_in_user(&server, "Jane Doe").await;
    let second = create_logged_in_user(&server, "John Doe").await;
    create_profile(&server, &first, "taken").await;

    let response = server
        .post("/api/profile")
        .add_header(AUTHORIZATION, second.auth_header())
        .json(&json!({ "handle": "taken", "status": "Developer", "skills": "Rust" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({ "handle": "That handle already exists" }));
}

#[tokio::test]
async fn test_public_lookups() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;
    let profile = create_profile(&server, &user, "jane").await;

    let by_handle: Option<Profile> = server.get("/api/profile/handle/jane").await.json();
    assert_eq!(by_handle.map(|p| p.id), Some(profile.id));

    let by_user: Option<Profile> = server
        .get(&format!("/api/profile/user/{}", user.id))
        .await
        .json();
    assert_eq!(by_user.map(|p| p.id), Some(profile.id));
}

#[tokio::test]
async fn test_missing_profiles_are_null() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server.get("/api/profile/handle/nobody").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);

    let response = server.get(&format!("/api/profile/user/{}", Uuid::new_v4())).await;
    assert_eq!(response.json::<Value>(), Value::Null);

    let response = server.get("/api/profile/user/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);

    let all: Vec<Profile> = server.get("/api/profile/all").await.json();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_education_needs_profile() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;

    let response = server
        .post("/api/profile/education")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({
            "school": "MIT",
            "degree": "BSc",
            "fieldofstudy": "Physics",
            "from": "2010-09-01",
            "current": true
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "noprofile": "There is no profile for this user" })
    );
}

#[tokio::test]
async fn test_education_newest_first_and_delete() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;
    create_profile(&server, &user, "jane").await;

    add_education(&server, &user, "First").await;
    add_education(&server, &user, "Second").await;
    let profile = add_education(&server, &user, "Third").await;

    let schools: Vec<&str> = profile.education.iter().map(|e| e.school.as_str()).collect();
    assert_eq!(schools, vec!["Third", "Second", "First"]);

    let middle = profile.education[1].id;
    let response = server
        .delete(&format!("/api/profile/education/{}", middle))
        .add_header(AUTHORIZATION, user.auth_header())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: Profile = response.json();
    let schools: Vec<&str> = profile.education.iter().map(|e| e.school.as_str()).collect();
    assert_eq!(schools, vec!["Third", "First"]);

    let response = server
        .delete(&format!("/api/profile/education/{}", middle))
        .add_header(AUTHORIZATION, user.auth_header())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_experience_entries() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;
    create_profile(&server, &user, "jane").await;

    let response = server
        .post("/api/profile/experience")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({
            "title": "Engineer",
            "company": "Acme",
            "from": "2020-01-01",
            "to": "2019-01-01"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["to"], "To date cannot be before the from date");

    let response = server
        .post("/api/profile/experience")
        .add_header(AUTHORIZATION, user.auth_header())
        .json(&json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Berlin",
            "from": "2020-01-01",
            "to": "2019-01-01",
            "current": true
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: Profile = response.json();
    assert_eq!(profile.experience.len(), 1);
    assert!(profile.experience[0].current);
    assert_eq!(profile.experience[0].to, None);

    let response = server
        .delete("/api/profile/experience/not-a-uuid")
        .add_header(AUTHORIZATION, user.auth_header())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert!(response.json::<Value>().get("experience").is_some());

    let response = server
        .delete(&format!("/api/profile/experience/{}", profile.experience[0].id))
        .add_header(AUTHORIZATION, user.auth_header())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Profile>().experience.is_empty());
}

#[tokio::test]
async fn test_cannot_delete_other_users_entries() {
    let app = TestApp::new().await;
    let server = app.server();
    let owner = create_logged_in_user(&server, "Jane Doe").await;
    let other = create_logged_in_user(&server, "John Doe").await;
    create_profile(&server, &owner, "jane").await;
    create_profile(&server, &other, "john").await;
    let profile = add_education(&server, &owner, "MIT").await;

    let response = server
        .delete(&format!("/api/profile/education/{}", profile.education[0].id))
        .add_header(AUTHORIZATION, other.auth_header())
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let still_there: Option<Profile> = server.get("/api/profile/handle/jane").await.json();
    assert_eq!(still_there.map(|p| p.education.len()), Some(1));
}

#[tokio::test]
async fn test_delete_account() {
    let app = TestApp::new().await;
    let server = app.server();
    let user = create_logged_in_user(&server, "Jane Doe").await;
    create_profile(&server, &user, "jane").await;
    add_education(&server, &user, "MIT").await;

    let response = server
        .delete("/api/profile")
        .add_header(AUTHORIZATION, user.auth_header())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    let gone: Value = server.get("/api/profile/handle/jane").await.json();
    assert_eq!(gone, Value::Null);

    // The token is still correctly signed, but its user no longer exists
    let response = server
        .get("/api/users/current")
        .add_header(AUTHORIZATION, user.auth_header())
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/users/login")
        .json(&json!({ "email": user.email, "password": crate::common::TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let (education,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM education")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert_eq!(education, 0);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = TestApp::new().await;
    let server = app.server();

    assert_eq!(server.get("/api/profile").await.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.delete("/api/profile").await.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        server.post("/api/profile/education").json(&json!({})).await.status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;
    let server = app.server();

    let response = server.get("/api/nothing/here").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Not Found", "status": 404 }));
}
