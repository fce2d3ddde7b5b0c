// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page and JSON routes that run one grid render per request.

use crate::models::GridContainer;
use crate::view::render_page;
use crate::AppState;
use axum::{extract::State, response::Html, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_page))
        .route("/api/grid", get(get_grid))
}

/// Render a fresh grid into a new container.
async fn render_fresh(state: &AppState) -> GridContainer {
    let mut container = GridContainer::new();
    state.grid_builder.build(&mut container).await;
    container
}

/// Full HTML page with the activity grid.
async fn get_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&render_fresh(&state).await))
}

/// The same render pass as JSON.
async fn get_grid(State(state): State<Arc<AppState>>) -> Json<GridContainer> {
    Json(render_fresh(&state).await)
}
