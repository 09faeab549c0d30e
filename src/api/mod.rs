pub mod common;
pub mod companies;
pub mod invoices;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

use crate::state::AppState;

/// Create the API router with all resource routes.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/companies", companies::create_companies_router())
        .nest("/invoices", invoices::create_invoices_router())
}

/// Basic health check endpoint. Does not touch the database.
async fn health_check() -> impl IntoResponse {
    let health = serde_json::json!({
        "status": "ok",
        "service": "biztime",
    });

    (StatusCode::OK, axum::Json(health))
}
