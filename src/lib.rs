use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod models;
pub mod state;

use api::create_api_router;
use state::AppState;

/// Builds the application router: resource routes plus the middleware layers.
pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_router())
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
