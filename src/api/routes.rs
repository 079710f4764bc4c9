// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::service::ProfileService;

/// Build the application router over a profile service.
pub fn router(service: ProfileService) -> Router {
    Router::new()
        // General routes
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::get_metrics))

        // Profile routes
        .route("/api/user", post(handlers::profiles::upsert_profile))
        .route("/api/user/:wallet_address", get(handlers::profiles::get_or_create_profile))

        // Add state and middleware
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        // The page is served from another origin
        .layer(CorsLayer::permissive())
}
