// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::metrics;
use crate::models::profile::{Profile, UpsertProfile};
use crate::store::{ProfileStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("wallet_address is required")]
    MissingWalletAddress,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Stateless request logic over a [`ProfileStore`].
#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Read a profile, creating it with default values if it does not exist
    /// yet. Never reports "not found" for a non-empty address.
    pub async fn get_or_create(&self, wallet_address: &str) -> Result<Profile, ServiceError> {
        let wallet_address = require_address(wallet_address)?;
        metrics::PROFILE_READS.inc();

        let result = match self.store.get(wallet_address).await {
            Ok(profile) => Ok(profile),
            Err(StoreError::NotFound(_)) => self.create_default(wallet_address).await,
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            error!("Failed to read profile {}: {}", wallet_address, e);
            metrics::STORE_FAILURES.with_label_values(&["read"]).inc();
            e.into()
        })
    }

    async fn create_default(&self, wallet_address: &str) -> Result<Profile, StoreError> {
        match self.store.create_default(wallet_address).await {
            Ok(profile) => {
                info!("Created default profile for {}", wallet_address);
                metrics::PROFILES_CREATED.inc();
                Ok(profile)
            }
            // A concurrent reader created it first
            Err(StoreError::Conflict(_)) => {
                debug!("Profile {} created concurrently, re-reading", wallet_address);
                self.store.get(wallet_address).await
            }
            Err(e) => Err(e),
        }
    }

    /// Insert or overwrite the full mutable field set for one address.
    pub async fn upsert(&self, request: UpsertProfile) -> Result<Profile, ServiceError> {
        require_address(&request.wallet_address)?;

        match self.store.upsert(&request).await {
            Ok(profile) => {
                debug!("Saved profile {}", profile.wallet_address);
                metrics::PROFILE_UPSERTS.inc();
                Ok(profile)
            }
            Err(e) => {
                error!("Failed to save profile {}: {}", request.wallet_address, e);
                metrics::STORE_FAILURES.with_label_values(&["upsert"]).inc();
                Err(e.into())
            }
        }
    }

    pub async fn health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

fn require_address(wallet_address: &str) -> Result<&str, ServiceError> {
    if wallet_address.is_empty() {
        return Err(ServiceError::MissingWalletAddress);
    }
    Ok(wallet_address)
}
