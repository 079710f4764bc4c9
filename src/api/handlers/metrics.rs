// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use axum::{http::header, response::IntoResponse};
use prometheus::TEXT_FORMAT;

/// Prometheus scrape endpoint
pub async fn get_metrics() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, TEXT_FORMAT)], crate::metrics::gather())
}
