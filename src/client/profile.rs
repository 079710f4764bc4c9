// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SessionError;
use crate::models::profile::{defaults, Profile, UpsertProfile};

/// Placeholder shown before any wallet is connected.
pub mod placeholder {
    pub const DISPLAY_NAME: &str = "Sad Emo";
    pub const STATUS: &str = "Offline...";
    pub const BIO: &str = "<b>About me:</b><br>I have no soul yet.";
    pub const AVATAR_URL: &str = "https://placehold.co/200x200/200052/FFF?text=Emo";
    pub const INTERESTS: &str = "Crypto, Monad, Tears";
}

/// The profile as the page shows it; also the shape of an edit draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCard {
    pub display_name: String,
    pub status: String,
    /// Raw markup. Rendered as-is by the page.
    pub bio: String,
    pub avatar_url: String,
    pub hero_image_url: String,
    pub music_url: String,
    pub interests: String,
    /// Set once the card comes from the server.
    pub last_updated: Option<NaiveDateTime>,
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self {
            display_name: placeholder::DISPLAY_NAME.to_string(),
            status: placeholder::STATUS.to_string(),
            bio: placeholder::BIO.to_string(),
            avatar_url: placeholder::AVATAR_URL.to_string(),
            hero_image_url: defaults::HERO_IMAGE_URL.to_string(),
            music_url: String::new(),
            interests: placeholder::INTERESTS.to_string(),
            last_updated: None,
        }
    }
}

impl From<Profile> for ProfileCard {
    fn from(profile: Profile) -> Self {
        Self {
            display_name: profile.display_name,
            status: profile.status,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            hero_image_url: profile.hero_image_url,
            music_url: profile.music_url,
            interests: profile.interests,
            last_updated: Some(profile.last_updated),
        }
    }
}

impl ProfileCard {
    /// Complete write for `wallet_address` carrying every editable field.
    pub fn to_upsert(&self, wallet_address: &str) -> UpsertProfile {
        UpsertProfile {
            wallet_address: wallet_address.to_string(),
            display_name: Some(self.display_name.clone()),
            status: Some(self.status.clone()),
            bio: Some(self.bio.clone()),
            avatar_url: Some(self.avatar_url.clone()),
            music_url: Some(self.music_url.clone()),
            interests: Some(self.interests.clone()),
        }
    }

    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::DisplayName => &self.display_name,
            ProfileField::Status => &self.status,
            ProfileField::Bio => &self.bio,
            ProfileField::AvatarUrl => &self.avatar_url,
            ProfileField::MusicUrl => &self.music_url,
            ProfileField::Interests => &self.interests,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::DisplayName => &mut self.display_name,
            ProfileField::Status => &mut self.status,
            ProfileField::Bio => &mut self.bio,
            ProfileField::AvatarUrl => &mut self.avatar_url,
            ProfileField::MusicUrl => &mut self.music_url,
            ProfileField::Interests => &mut self.interests,
        };
        *slot = value.into();
    }
}

/// Fields a user may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    DisplayName,
    Status,
    Bio,
    AvatarUrl,
    MusicUrl,
    Interests,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::DisplayName,
        ProfileField::Status,
        ProfileField::Bio,
        ProfileField::AvatarUrl,
        ProfileField::MusicUrl,
        ProfileField::Interests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::DisplayName => "display_name",
            ProfileField::Status => "status",
            ProfileField::Bio => "bio",
            ProfileField::AvatarUrl => "avatar_url",
            ProfileField::MusicUrl => "music_url",
            ProfileField::Interests => "interests",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SessionError::UnknownField(s.to_string()))
    }
}

/// `0x1234...` form shown in the navigation bar.
pub fn short_address(address: &str) -> String {
    format!("{}...", prefix(address, 6))
}

/// Vanity page slug: the first eight characters of the address, or `guest`.
pub fn page_slug(address: Option<&str>) -> String {
    match address {
        Some(address) => prefix(address, 8).to_string(),
        None => "guest".to_string(),
    }
}

fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
