use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use chirp_api::{AppStateInner, router};
use chirp_db::Database;

fn app() -> Router {
    let store = Arc::new(Database::open_in_memory().unwrap());
    router(Arc::new(AppStateInner::new(store)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn register_alice(app: &Router) {
    let (status, _) = send(
        app,
        Method::POST,
        "/register",
        Some(json!({"username": "alice", "password": "pass1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn register_and_login() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({"username": "alice", "password": "pass1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!({"id": 1, "username": "alice", "password": "pass1"}));

    let (status, _) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({"username": "alice", "password": "pass1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/register",
        Some(json!({"username": "bob", "password": "abc"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"username": "alice", "password": "pass1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["id"], 1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"username": "alice", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn message_lifecycle() {
    let app = app();
    register_alice(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/messages",
        Some(json!({"postedBy": 1, "text": "hello", "postedAtEpoch": 1669947792})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_of(&body),
        json!({"id": 1, "postedBy": 1, "text": "hello", "postedAtEpoch": 1669947792})
    );

    let (status, body) = send(&app, Method::GET, "/messages/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["text"], "hello");

    let (status, _) = send(&app, Method::PATCH, "/messages/1", Some(json!({"text": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/messages/1",
        Some(json!({"text": "edited", "postedBy": 7, "postedAtEpoch": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json_of(&body),
        json!({"id": 1, "postedBy": 1, "text": "edited", "postedAtEpoch": 1669947792})
    );

    let (status, body) = send(&app, Method::DELETE, "/messages/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["text"], "edited");

    let (status, body) = send(&app, Method::DELETE, "/messages/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (status, body) = send(&app, Method::GET, "/messages/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn invalid_messages_are_bad_requests() {
    let app = app();
    register_alice(&app).await;

    for body in [
        json!({"postedBy": 1, "text": "", "postedAtEpoch": 1}),
        json!({"postedBy": 1, "text": "x".repeat(256), "postedAtEpoch": 1}),
        json!({"postedBy": 2, "text": "hello", "postedAtEpoch": 1}),
    ] {
        let (status, _) = send(&app, Method::POST, "/messages", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, _) = send(&app, Method::PATCH, "/messages/9", Some(json!({"text": "hi"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listings_are_always_arrays() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([]));

    register_alice(&app).await;
    for text in ["first", "second"] {
        send(
            &app,
            Method::POST,
            "/messages",
            Some(json!({"postedBy": 1, "text": text, "postedAtEpoch": 1})),
        )
        .await;
    }

    let (_, body) = send(&app, Method::GET, "/messages", None).await;
    assert_eq!(json_of(&body).as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::GET, "/accounts/1/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<Value> = json_of(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["text"].clone())
        .collect();
    assert_eq!(texts, vec![json!("first"), json!("second")]);

    let (status, body) = send(&app, Method::GET, "/accounts/2/messages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body), json!([]));
}
