//! Integration tests for package and route endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_client_creates_and_lists_own_packages() {
    let app = helpers::TestApp::new();
    let token = app.login_as("client@example.com", "client").await;

    let (status, body) = app
        .request(
            "POST",
            "/api/packages",
            Some(&token),
            Some(json!({
                "recipient": "Grace Hopper",
                "destination": "12 Harbor Way",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["sender_email"], "client@example.com");
    assert_eq!(body["status"], "registered");
    assert!(body["tracking_code"].as_str().unwrap().starts_with("ST-"));

    let (status, body) = app.request("GET", "/api/packages", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_clients_do_not_see_each_others_packages() {
    let app = helpers::TestApp::new();
    let first = app.login_as("first@example.com", "client").await;
    let second = app.login_as("second@example.com", "client").await;

    app.request(
        "POST",
        "/api/packages",
        Some(&first),
        Some(json!({"recipient": "R", "destination": "D"})),
    )
    .await;

    let (status, body) = app.request("GET", "/api/packages", Some(&second), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_lists_all_packages() {
    let app = helpers::TestApp::new();
    let client = app.login_as("client@example.com", "client").await;
    let admin = app.login_as("admin@example.com", "admin").await;

    app.request(
        "POST",
        "/api/packages",
        Some(&client),
        Some(json!({"recipient": "R", "destination": "D"})),
    )
    .await;

    let (status, body) = app.request("GET", "/api/packages", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_driver_sees_only_packages_on_their_routes() {
    let app = helpers::TestApp::new();
    let client = app.login_as("client@example.com", "client").await;
    let driver = app.login_as("driver@example.com", "driver").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/packages",
            Some(&client),
            Some(json!({"recipient": "R", "destination": "D"})),
        )
        .await;
    let package_id: uuid::Uuid = created["id"].as_str().unwrap().parse().unwrap();

    let (status, body) = app.request("GET", "/api/packages", Some(&driver), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let route_id = app.routes.seed("North Loop", "Depot", "Harbor", 42.0);
    app.packages.set_route_driver(route_id, "driver@example.com");
    app.packages.assign_to_route(package_id, route_id);

    let (status, body) = app.request("GET", "/api/packages", Some(&driver), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_cannot_update_status() {
    let app = helpers::TestApp::new();
    let client = app.login_as("client@example.com", "client").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/packages",
            Some(&client),
            Some(json!({"recipient": "R", "destination": "D"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _body) = app
        .request(
            "PUT",
            &format!("/api/packages/{id}/status"),
            Some(&client),
            Some(json!({"status": "in_transit"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_updates_status() {
    let app = helpers::TestApp::new();
    let client = app.login_as("client@example.com", "client").await;
    let admin = app.login_as("admin@example.com", "admin").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/packages",
            Some(&client),
            Some(json!({"recipient": "R", "destination": "D"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/packages/{id}/status"),
            Some(&admin),
            Some(json!({"status": "delivered"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "delivered");
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = helpers::TestApp::new();
    let admin = app.login_as("admin@example.com", "admin").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/packages",
            Some(&admin),
            Some(json!({"recipient": "R", "destination": "D"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _body) = app
        .request(
            "PUT",
            &format!("/api/packages/{id}/status"),
            Some(&admin),
            Some(json!({"status": "teleported"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_package_listing_requires_token() {
    let app = helpers::TestApp::new();

    let (status, _body) = app.request("GET", "/api/packages", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_assign_driver_is_admin_only() {
    let app = helpers::TestApp::new();
    let admin = app.login_as("admin@example.com", "admin").await;
    let driver = app.login_as("driver@example.com", "driver").await;

    let route_id = app.routes.seed("North Loop", "Depot", "Harbor", 42.0);

    let (status, _body) = app
        .request(
            "PUT",
            &format!("/api/routes/{route_id}/driver"),
            Some(&driver),
            Some(json!({"driver_email": "driver@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .request(
            "PUT",
            &format!("/api/routes/{route_id}/driver"),
            Some(&admin),
            Some(json!({"driver_email": "driver@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["driver_email"], "driver@example.com");
}

#[tokio::test]
async fn test_routes_listing_visible_to_any_role() {
    let app = helpers::TestApp::new();
    let client = app.login_as("client@example.com", "client").await;
    app.routes.seed("North Loop", "Depot", "Harbor", 42.0);

    let (status, body) = app.request("GET", "/api/routes", Some(&client), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_cannot_read_foreign_package() {
    let app = helpers::TestApp::new();
    let first = app.login_as("first@example.com", "client").await;
    let second = app.login_as("second@example.com", "client").await;

    let (_, created) = app
        .request(
            "POST",
            "/api/packages",
            Some(&first),
            Some(json!({"recipient": "R", "destination": "D"})),
        )
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, _body) = app
        .request("GET", &format!("/api/packages/{id}"), Some(&second), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
