//! Integration tests for the authentication and authorization flow.

mod helpers;

use http::StatusCode;
use serde_json::json;

use shiptrack_entity::Role;

#[tokio::test]
async fn test_register_then_login_issues_token() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "password123",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "client");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert!(body["user"].get("password_hash").is_none());

    let claims = app
        .token_codec
        .verify(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, "ada@example.com");
    assert_eq!(claims.role, Role::Client);
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "wrongpassword",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_identity_matches_bad_secret_response() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (unknown_status, unknown_body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "nobody@example.com",
                "password": "password123",
                "role": "client",
            })),
        )
        .await;
    let (bad_secret_status, bad_secret_body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "wrongpassword",
                "role": "client",
            })),
        )
        .await;

    // Identical surface for both failure modes.
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_secret_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body, bad_secret_body);
}

#[tokio::test]
async fn test_login_with_wrong_claimed_role_is_forbidden() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "password123",
                "role": "admin",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_with_unknown_role_string_is_rejected() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({
                "email": "ada@example.com",
                "password": "password123",
                "role": "superuser",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = helpers::TestApp::new();
    app.register("ada@example.com", "password123", "client").await;

    let (status, _body) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "email": "ada@example.com",
                "name": "Ada Again",
                "address": "2 Other Street",
                "password": "password456",
                "role": "driver",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let app = helpers::TestApp::new();

    let (status, _body) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "email": "ada@example.com",
                "name": "Ada",
                "address": "1 Test Street",
                "password": "short",
                "role": "client",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let (status, _body) = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_tampered_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let token = app.login_as("ada@example.com", "client").await;

    // Flip one character of the signature segment.
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let (status, _body) = app
        .request("GET", "/api/auth/me", Some(&tampered), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_reflects_token_claims() {
    let app = helpers::TestApp::new();
    let token = app.login_as("driver@example.com", "driver").await;

    let (status, body) = app
        .request("GET", "/api/auth/me", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "driver@example.com");
    assert_eq!(body["role"], "driver");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let (status, body) = app.request("GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
