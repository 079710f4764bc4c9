// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::service::ProfileService;

/// Liveness text for `GET /`
pub async fn root() -> &'static str {
    "Emodak Space profile server is running"
}

/// Health check endpoint
pub async fn health_check(State(service): State<ProfileService>) -> impl IntoResponse {
    // Check store reachability
    match service.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "message": "API server is running"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "message": format!("Store unreachable: {}", e)
            })),
        ),
    }
}
