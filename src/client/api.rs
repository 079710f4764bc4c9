// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::error::SessionError;
use crate::config::ClientConfig;
use crate::models::profile::{Profile, UpsertProfile};

/// Client side of the profile HTTP API.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `GET {base}/user/{address}`; read-or-create on the server.
    async fn fetch(&self, wallet_address: &str) -> Result<Profile, SessionError>;

    /// `POST {base}/user`; returns the row as stored.
    async fn save(&self, profile: &UpsertProfile) -> Result<Profile, SessionError>;
}

pub struct HttpProfileApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProfileApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/user[/{address}]`, with the address percent-encoded as a
    /// single path segment.
    fn user_url(&self, wallet_address: Option<&str>) -> Result<Url, SessionError> {
        let invalid = || SessionError::InvalidEndpoint(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty().push("user");
            if let Some(address) = wallet_address {
                segments.push(address);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn fetch(&self, wallet_address: &str) -> Result<Profile, SessionError> {
        let url = self.user_url(Some(wallet_address))?;
        debug!("Fetching profile from {}", url);

        let profile = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Profile>()
            .await?;
        Ok(profile)
    }

    async fn save(&self, profile: &UpsertProfile) -> Result<Profile, SessionError> {
        let url = self.user_url(None)?;
        debug!("Saving profile {} to {}", profile.wallet_address, url);

        let stored = self
            .client
            .post(url)
            .json(profile)
            .send()
            .await?
            .error_for_status()?
            .json::<Profile>()
            .await?;
        Ok(stored)
    }
}
