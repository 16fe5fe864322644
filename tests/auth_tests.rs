//! End-to-end tests for registration and login over the full router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn register_returns_confirmation_message() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let response = app
        .oneshot(post_json(
            "/register/",
            json!({"username": "alice", "password": "a-strong-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn duplicate_username_is_rejected_with_conflict() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let first = app
        .clone()
        .oneshot(post_json(
            "/register/",
            json!({"username": "bob", "password": "first-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json(
            "/register/",
            json!({"username": "bob", "password": "second-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = common::body_json(second).await;
    assert_eq!(body["error"], "duplicate_username");
}

#[tokio::test]
async fn empty_username_is_rejected() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let response = app
        .oneshot(post_json(
            "/register/",
            json!({"username": "", "password": "whatever"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn missing_field_is_rejected_by_extractor() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let response = app
        .oneshot(post_json("/register/", json!({"username": "carol"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn login_returns_bearer_token_with_username_subject() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let register = app
        .clone()
        .oneshot(post_json(
            "/register/",
            json!({"username": "dana", "password": "dana-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let login = app
        .oneshot(post_json(
            "/login/",
            json!({"username": "dana", "password": "dana-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(login.status(), StatusCode::OK);
    let body = common::body_json(login).await;
    assert_eq!(body["token_type"], "bearer");

    let token = body["access_token"].as_str().expect("token is a string");
    let decoded = jsonwebtoken::decode::<serde_json::Value>(
        token,
        &jsonwebtoken::DecodingKey::from_secret(b"test-secret"),
        &jsonwebtoken::Validation::default(),
    )
    .expect("token decodes with the configured secret");
    assert_eq!(decoded.claims["sub"], "dana");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let register = app
        .clone()
        .oneshot(post_json(
            "/register/",
            json!({"username": "erin", "password": "right-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let login = app
        .oneshot(post_json(
            "/login/",
            json!({"username": "erin", "password": "wrong-password"}),
        ))
        .await
        .unwrap();

    assert_eq!(login.status(), StatusCode::UNAUTHORIZED);
    let body = common::body_json(login).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert!(body.get("access_token").is_none());
}

#[tokio::test]
async fn unknown_user_is_indistinguishable_from_wrong_password() {
    let app = common::test_app(common::StubCompletions::ok("unused"));

    let register = app
        .clone()
        .oneshot(post_json(
            "/register/",
            json!({"username": "frank", "password": "frank-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(register.status(), StatusCode::OK);

    let wrong_password = app
        .clone()
        .oneshot(post_json(
            "/login/",
            json!({"username": "frank", "password": "not-franks-password"}),
        ))
        .await
        .unwrap();
    let unknown_user = app
        .oneshot(post_json(
            "/login/",
            json!({"username": "nobody", "password": "irrelevant"}),
        ))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        common::body_bytes(wrong_password).await,
        common::body_bytes(unknown_user).await
    );
}
