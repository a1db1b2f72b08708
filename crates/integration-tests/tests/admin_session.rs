//! Admin panel, and its isolation from the member console.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::http::StatusCode;
use loyalty_pro_integration_tests::{ADMIN_DEMO_PASSWORD, MEMBER_DEMO_PASSWORD, TestApp};
use serde_json::json;

const ADMIN_PAGES: &[&str] = &[
    "/admin/dashboard",
    "/admin/users",
    "/admin/merchants",
    "/admin/outlets",
    "/admin/transactions",
    "/admin/account",
];

#[tokio::test]
async fn test_anonymous_admin_pages_redirect_to_admin_login() {
    let app = TestApp::new();

    for page in ADMIN_PAGES {
        let resp = app.get(page).await;
        assert_eq!(resp.status, StatusCode::SEE_OTHER, "{page}");
        assert_eq!(resp.location(), Some("/admin/login"), "{page}");
    }

    let resp = app.get("/admin").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), Some("/admin/login"));
}

#[tokio::test]
async fn test_admin_root_goes_to_login_even_when_signed_in() {
    let app = TestApp::new();
    app.login("/admin/login", "admin@loyaltypro.com", ADMIN_DEMO_PASSWORD)
        .await;

    let resp = app.get("/admin").await;
    assert_eq!(resp.location(), Some("/admin/login"));
}

#[tokio::test]
async fn test_admin_login() {
    let app = TestApp::new();

    let resp = app
        .login("/admin/login", "admin@loyaltypro.com", ADMIN_DEMO_PASSWORD)
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    let body = resp.json();
    assert_eq!(body["principal"]["role"], "admin");
    assert_eq!(body["principal"]["lastName"], "Administrator");
    assert_eq!(body["navigation"].as_array().unwrap().len(), 6);

    for page in ADMIN_PAGES {
        assert_eq!(app.get(page).await.status, StatusCode::OK, "{page}");
    }

    let shell = app.get("/admin/dashboard").await.json();
    assert_eq!(shell["dashboard"], "admin");
    assert_eq!(shell["panel"], "Admin Panel");
    assert_eq!(shell["roleName"], "System Administrator");
}

#[tokio::test]
async fn test_credentials_do_not_cross_contexts() {
    let app = TestApp::new();

    let resp = app
        .login("/login", "admin@loyaltypro.com", ADMIN_DEMO_PASSWORD)
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let resp = app
        .login("/admin/login", "john.doe@branch.com", MEMBER_DEMO_PASSWORD)
        .await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let app = TestApp::new();
    app.login("/admin/login", "admin@loyaltypro.com", ADMIN_DEMO_PASSWORD)
        .await;

    // an admin session grants nothing in the member console
    let resp = app.get("/dashboard").await;
    assert_eq!(resp.location(), Some("/login"));

    app.login("/login", "sarah@loyaltypro.com", MEMBER_DEMO_PASSWORD)
        .await;
    assert_eq!(app.get("/me").await.json()["role"], "merchant_owner");
    assert_eq!(app.get("/admin/me").await.json()["role"], "admin");

    // signing out of one leaves the other signed in
    let resp = app.post("/admin/logout").await;
    assert_eq!(resp.location(), Some("/admin/login"));
    assert_eq!(app.get("/admin/users").await.status, StatusCode::SEE_OTHER);
    assert_eq!(app.get("/workers").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_has_no_sign_up() {
    let app = TestApp::new();
    let resp = app.post_json("/admin/signup", &json!({})).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_change_password_is_guarded() {
    let app = TestApp::new();
    let form = json!({
        "currentPassword": "admin123",
        "newPassword": "a-better-one",
        "confirmPassword": "a-better-one",
    });

    let resp = app.post_json("/admin/change-password", &form).await;
    assert_eq!(resp.location(), Some("/admin/login"));

    app.login("/admin/login", "admin@loyaltypro.com", ADMIN_DEMO_PASSWORD)
        .await;
    let resp = app.post_json("/admin/change-password", &form).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json(), json!({ "success": true }));
}

#[tokio::test]
async fn test_admin_password_recovery() {
    let app = TestApp::new();
    let resp = app
        .post_json(
            "/admin/forgot-password",
            &json!({ "email": "admin@loyaltypro.com" }),
        )
        .await;
    assert_eq!(resp.json(), json!({ "success": true }));
}
