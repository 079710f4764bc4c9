// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::service::ServiceError;

/// Failures surfaced over HTTP as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Store failure; the message is generic and the cause is only logged.
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Map a service failure, using `context` as the public message for
    /// store errors.
    pub fn from_service(err: ServiceError, context: &'static str) -> Self {
        match err {
            ServiceError::MissingWalletAddress => ApiError::BadRequest(err.to_string()),
            ServiceError::Store(_) => ApiError::Internal(context),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
