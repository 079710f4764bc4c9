// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::models::profile::{Profile, UpsertProfile};
use crate::service::ProfileService;

/// Get a profile by wallet address, creating it with defaults on first read
pub async fn get_or_create_profile(
    State(service): State<ProfileService>,
    Path(wallet_address): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    debug!("Getting profile for wallet {}", wallet_address);

    service
        .get_or_create(&wallet_address)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Database error"))
}

/// Insert or overwrite a profile from the full field set in the body
pub async fn upsert_profile(
    State(service): State<ProfileService>,
    payload: Result<Json<UpsertProfile>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected profile body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;
    debug!("Saving profile for wallet {}", body.wallet_address);

    service
        .upsert(body)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Save failed"))
}
