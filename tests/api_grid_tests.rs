// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Router tests for the page, grid JSON and health endpoints.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{activity, mount_token_ok, ACTIVITIES_PATH};

async fn mount_one_activity(server: &MockServer) {
    mount_token_ok(server).await;
    Mock::given(method("GET"))
        .and(path(ACTIVITIES_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([activity(1, "2025-04-02T10:00:00Z")])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let (app, _state) = common::create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_grid_json_has_full_window() {
    let server = MockServer::start().await;
    mount_one_activity(&server).await;
    let (app, state) = common::create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/api/grid").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let cells = json["cells"].as_array().unwrap();
    assert_eq!(cells.len(), state.config.window.length_days as usize);
    assert_eq!(cells[0]["date"], "2025-03-30");

    let busy = cells
        .iter()
        .find(|c| c["date"] == "2025-04-02")
        .unwrap();
    assert_eq!(busy["count"], 1);
    assert_eq!(busy["level"], 2);
    assert_eq!(busy["tooltip"], "1 activities on 2025-04-02");

    assert!(json["month_labels"].is_array());
    assert_eq!(
        json["debug"],
        "Fetched 1 activities (first: 2025-04-02T10:00:00Z, last: 2025-04-02T10:00:00Z)"
    );
}

#[tokio::test]
async fn test_page_renders_html_grid() {
    let server = MockServer::start().await;
    mount_one_activity(&server).await;
    let (app, state) = common::create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(response.headers().get("Content-Security-Policy").is_some());

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert_eq!(
        html.matches(r#"<div class="strava-cell"#).count(),
        state.config.window.length_days as usize
    );
    assert!(html.contains(r#"class="strava-cell level-2" data-date="2025-04-02""#));
    assert!(html.contains(r#"class="strava-months""#));
}
