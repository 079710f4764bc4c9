// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

//! Durable keyed storage for profiles.
//!
//! A store owns default values and the atomic insert-or-update decision.
//! There is no partial update and no delete: every write goes through
//! [`ProfileStore::upsert`] with a complete field set.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::profile::{Profile, UpsertProfile};

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile {0} not found")]
    NotFound(String),

    #[error("profile {0} already exists")]
    Conflict(String),

    #[error("column constraint violated: {0}")]
    Constraint(String),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Exact-match lookup by wallet address.
    async fn get(&self, wallet_address: &str) -> Result<Profile, StoreError>;

    /// Insert a row holding only the key. Fails with `Conflict` when the key
    /// is already present.
    async fn create_default(&self, wallet_address: &str) -> Result<Profile, StoreError>;

    /// Insert or overwrite every mutable column, stamping `last_updated`.
    async fn upsert(&self, profile: &UpsertProfile) -> Result<Profile, StoreError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
