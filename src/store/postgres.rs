// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::{debug, error};

use super::{ProfileStore, StoreError};
use crate::db::{Database, DbConnection};
use crate::models::profile::{NewProfile, Profile, UpsertProfile};
use crate::schema::users;

impl Database {
    async fn store_connection(&self) -> Result<DbConnection, StoreError> {
        self.get_connection().await.map_err(|e| {
            error!("Failed to get database connection: {}", e);
            StoreError::Pool(e.to_string())
        })
    }
}

#[async_trait]
impl ProfileStore for Database {
    async fn get(&self, wallet_address: &str) -> Result<Profile, StoreError> {
        let mut conn = self.store_connection().await?;

        users::table
            .find(wallet_address)
            .select(Profile::as_select())
            .first(&mut conn)
            .await
            .map_err(|e| match e {
                DieselError::NotFound => StoreError::NotFound(wallet_address.to_string()),
                other => other.into(),
            })
    }

    async fn create_default(&self, wallet_address: &str) -> Result<Profile, StoreError> {
        let mut conn = self.store_connection().await?;
        debug!("Inserting default profile for {}", wallet_address);

        diesel::insert_into(users::table)
            .values(&NewProfile {
                wallet_address,
                last_updated: Utc::now().naive_utc(),
            })
            .returning(Profile::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    StoreError::Conflict(wallet_address.to_string())
                }
                other => other.into(),
            })
    }

    async fn upsert(&self, profile: &UpsertProfile) -> Result<Profile, StoreError> {
        let mut conn = self.store_connection().await?;
        debug!("Upserting profile for {}", profile.wallet_address);

        // Unsupplied fields insert DEFAULT, and `excluded` carries that
        // default into the update branch too. `last_updated` is UTC, never
        // the session-local CURRENT_TIMESTAMP.
        let stamped = Utc::now().naive_utc();
        let stored = diesel::insert_into(users::table)
            .values((profile, users::last_updated.eq(stamped)))
            .on_conflict(users::wallet_address)
            .do_update()
            .set((
                users::display_name.eq(excluded(users::display_name)),
                users::status.eq(excluded(users::status)),
                users::bio.eq(excluded(users::bio)),
                users::avatar_url.eq(excluded(users::avatar_url)),
                users::music_url.eq(excluded(users::music_url)),
                users::interests.eq(excluded(users::interests)),
                users::last_updated.eq(excluded(users::last_updated)),
            ))
            .returning(Profile::as_returning())
            .get_result(&mut conn)
            .await?;

        Ok(stored)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.store_connection().await?;

        diesel::sql_query("SELECT 1").execute(&mut conn).await?;
        Ok(())
    }
}
