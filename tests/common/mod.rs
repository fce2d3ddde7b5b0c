// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use std::sync::Arc;
use stride_grid::config::{Config, GridWindow, PageFailurePolicy};
use stride_grid::routes::create_router;
use stride_grid::AppState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/oauth/token";
pub const ACTIVITIES_PATH: &str = "/api/v3/athlete/activities";

/// 2025-04-01, a Tuesday.
#[allow(dead_code)]
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

/// Config pointing both Strava endpoints at the mock server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, policy: PageFailurePolicy) -> Config {
    Config {
        token_endpoint: format!("{}{}", server.uri(), TOKEN_PATH),
        activities_endpoint: format!("{}{}", server.uri(), ACTIVITIES_PATH),
        window: GridWindow::fixed(window_start(), 371),
        page_failure: policy,
        ..Config::test_default()
    }
}

/// Mount a token endpoint that hands out `test_access_token`.
#[allow(dead_code)]
pub async fn mount_token_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token_type": "Bearer",
            "access_token": "test_access_token",
            "expires_at": 1743490800,
            "refresh_token": "test_refresh_token"
        })))
        .mount(server)
        .await;
}

/// Activity JSON as the list endpoint returns it.
#[allow(dead_code)]
pub fn activity(id: u64, start_date_local: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Morning Run",
        "sport_type": "Run",
        "start_date": start_date_local,
        "start_date_local": start_date_local,
        "distance": 5000.0
    })
}

/// Create a test app backed by the mock server.
#[allow(dead_code)]
pub fn create_test_app(server: &MockServer) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config(
        server,
        PageFailurePolicy::KeepPartial,
    )));
    (create_router(state.clone()), state)
}
