// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ProfileStore, StoreError};
use crate::models::profile::{
    Profile, UpsertProfile, MAX_DISPLAY_NAME_LEN, MAX_STATUS_LEN, MAX_WALLET_ADDRESS_LEN,
};

/// In-process store with the same column rules as the `users` table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<HashMap<String, Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn check_len(column: &str, value: &str, max: usize) -> Result<(), StoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(StoreError::Constraint(format!(
            "{} is {} characters, limit is {}",
            column, len, max
        )));
    }
    Ok(())
}

fn check_row(row: &Profile) -> Result<(), StoreError> {
    check_len("wallet_address", &row.wallet_address, MAX_WALLET_ADDRESS_LEN)?;
    check_len("display_name", &row.display_name, MAX_DISPLAY_NAME_LEN)?;
    check_len("status", &row.status, MAX_STATUS_LEN)
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, wallet_address: &str) -> Result<Profile, StoreError> {
        self.rows
            .read()
            .await
            .get(wallet_address)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(wallet_address.to_string()))
    }

    async fn create_default(&self, wallet_address: &str) -> Result<Profile, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(wallet_address) {
            return Err(StoreError::Conflict(wallet_address.to_string()));
        }

        let row = Profile::with_defaults(wallet_address, Utc::now().naive_utc());
        check_row(&row)?;
        debug!("Inserting default profile for {}", wallet_address);
        rows.insert(row.wallet_address.clone(), row.clone());
        Ok(row)
    }

    async fn upsert(&self, profile: &UpsertProfile) -> Result<Profile, StoreError> {
        // The write lock spans the lookup and the write, so the
        // insert-or-update decision is atomic.
        let mut rows = self.rows.write().await;
        let existing = rows.get(&profile.wallet_address).cloned();

        let row = profile.apply(existing, Utc::now().naive_utc());
        check_row(&row)?;
        debug!("Upserting profile for {}", profile.wallet_address);
        rows.insert(row.wallet_address.clone(), row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
