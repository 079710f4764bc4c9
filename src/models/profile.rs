// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use crate::schema::users;

/// Column defaults, kept in step with the `users` migration.
pub mod defaults {
    pub const DISPLAY_NAME: &str = "Sad Emo";
    pub const STATUS: &str = "is listening to silence...";
    pub const BIO: &str = "<b>About me:</b><br>I have no soul.";
    pub const AVATAR_URL: &str = "https://i.imgur.com/Gj3H3gJ.png";
    pub const HERO_IMAGE_URL: &str =
        "https://upload.wikimedia.org/wikipedia/commons/5/59/Monad_Logo_Purple.png";
    pub const MUSIC_URL: &str = "";
    pub const INTERESTS: &str = "Crypto, Tears, Monad";
}

/// VARCHAR bounds from the `users` table.
pub const MAX_WALLET_ADDRESS_LEN: usize = 42;
pub const MAX_DISPLAY_NAME_LEN: usize = 50;
pub const MAX_STATUS_LEN: usize = 255;

/// A stored profile row, keyed by wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Profile {
    pub wallet_address: String,
    pub display_name: String,
    pub status: String,
    /// Raw markup, returned exactly as stored.
    pub bio: String,
    pub avatar_url: String,
    pub hero_image_url: String,
    pub music_url: String,
    pub interests: String,
    pub last_updated: NaiveDateTime,
}

impl Profile {
    /// A row holding only the key, every other column at its default.
    pub fn with_defaults(wallet_address: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            display_name: defaults::DISPLAY_NAME.to_string(),
            status: defaults::STATUS.to_string(),
            bio: defaults::BIO.to_string(),
            avatar_url: defaults::AVATAR_URL.to_string(),
            hero_image_url: defaults::HERO_IMAGE_URL.to_string(),
            music_url: defaults::MUSIC_URL.to_string(),
            interests: defaults::INTERESTS.to_string(),
            last_updated: now,
        }
    }
}

/// Insert carrying only the key and the UTC stamp; used for lazy creation
/// on first read.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewProfile<'a> {
    pub wallet_address: &'a str,
    pub last_updated: NaiveDateTime,
}

/// Full-row write. A `None` field inserts the column default, and on conflict
/// the stored value is replaced by that default as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct UpsertProfile {
    /// Missing or null in the body reads as empty and is rejected by the
    /// service.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub wallet_address: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub music_url: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UpsertProfile {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            ..Default::default()
        }
    }

    /// Apply this write on top of `existing` (or a fresh default row), the
    /// same way the SQL upsert resolves it.
    pub fn apply(&self, existing: Option<Profile>, now: NaiveDateTime) -> Profile {
        let base = existing.unwrap_or_else(|| Profile::with_defaults(&self.wallet_address, now));
        let pick = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Profile {
            wallet_address: base.wallet_address,
            display_name: pick(&self.display_name, defaults::DISPLAY_NAME),
            status: pick(&self.status, defaults::STATUS),
            bio: pick(&self.bio, defaults::BIO),
            avatar_url: pick(&self.avatar_url, defaults::AVATAR_URL),
            hero_image_url: base.hero_image_url,
            music_url: pick(&self.music_url, defaults::MUSIC_URL),
            interests: pick(&self.interests, defaults::INTERESTS),
            last_updated: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn upsert_body_accepts_partial_fields() {
        let body: UpsertProfile =
            serde_json::from_str(r#"{"wallet_address":"0xabc","display_name":"X"}"#).unwrap();

        assert_eq!(body.wallet_address, "0xabc");
        assert_eq!(body.display_name.as_deref(), Some("X"));
        assert!(body.status.is_none());
        assert!(body.music_url.is_none());
    }

    #[test]
    fn null_or_missing_wallet_address_reads_as_empty() {
        let null: UpsertProfile = serde_json::from_str(r#"{"wallet_address":null}"#).unwrap();
        let missing: UpsertProfile = serde_json::from_str(r#"{"status":"x"}"#).unwrap();

        assert_eq!(null.wallet_address, "");
        assert_eq!(missing.wallet_address, "");
    }

    #[test]
    fn apply_resets_unsupplied_fields_to_defaults() {
        let now = Utc::now().naive_utc();
        let mut existing = Profile::with_defaults("0xabc", now);
        existing.status = "crying".to_string();
        existing.hero_image_url = "https://example.com/hero.png".to_string();

        let mut write = UpsertProfile::new("0xabc");
        write.display_name = Some("X".to_string());
        let stored = write.apply(Some(existing), now);

        assert_eq!(stored.display_name, "X");
        assert_eq!(stored.status, defaults::STATUS);
        // hero image is not part of the writable set
        assert_eq!(stored.hero_image_url, "https://example.com/hero.png");
    }

    #[test]
    fn profile_serializes_as_flat_record() {
        let now = Utc::now().naive_utc();
        let value = serde_json::to_value(Profile::with_defaults("0xabc", now)).unwrap();

        assert_eq!(value["wallet_address"], "0xabc");
        assert_eq!(value["display_name"], defaults::DISPLAY_NAME);
        assert_eq!(value["music_url"], "");
        assert!(value["last_updated"].is_string());
    }
}
