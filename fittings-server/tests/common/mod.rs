//! Drives the full router in-process over a private in-memory database

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use fittings_server::{Config, ServerState, api};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub async fn test_state() -> ServerState {
    ServerState::in_memory(Config::default())
        .await
        .expect("in-memory database")
}

pub async fn test_app() -> Router {
    api::build_app(test_state().await)
}

/// Send one request; returns status, headers and the JSON body (`Null` when empty)
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, http::HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, headers, value)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, value) = call(app, method, uri, body).await;
    (status, value)
}

/// Send a raw (possibly malformed) JSON body
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub fn item_json(qr_id: &str, fitting_type: &str, date: &str) -> Value {
    json!({
        "qr_id": qr_id,
        "type": fitting_type,
        "warranty": "2 years",
        "date_of_manufacture": date,
        "manufacturer": "Acme Rail",
    })
}

pub async fn create(app: &Router, body: Value) -> Value {
    let (status, value) = send(app, Method::POST, "/api/fittings", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {value}");
    value
}
