// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::api::ProfileApi;
use super::error::SessionError;
use super::profile::{ProfileCard, ProfileField};
use super::wallet::{self, Wallet};

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
    Editing,
}

#[derive(Debug)]
enum Phase {
    Disconnected,
    Connecting,
    Connected { address: String },
    Editing { address: String, draft: ProfileCard },
}

/// Page-lifetime state: the connected wallet, the displayed profile and an
/// optional unsaved draft.
pub struct Session {
    wallet: Option<Arc<dyn Wallet>>,
    api: Arc<dyn ProfileApi>,
    phase: Phase,
    profile: ProfileCard,
    loading: bool,
}

impl Session {
    /// `wallet` is `None` when the page has no injected wallet.
    pub fn new(wallet: Option<Arc<dyn Wallet>>, api: Arc<dyn ProfileApi>) -> Self {
        Self {
            wallet,
            api,
            phase: Phase::Disconnected,
            profile: ProfileCard::default(),
            loading: false,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Disconnected => SessionState::Disconnected,
            Phase::Connecting => SessionState::Connecting,
            Phase::Connected { .. } => SessionState::Connected,
            Phase::Editing { .. } => SessionState::Editing,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.phase {
            Phase::Connected { address } | Phase::Editing { address, .. } => Some(address),
            Phase::Disconnected | Phase::Connecting => None,
        }
    }

    /// The profile currently on display.
    pub fn profile(&self) -> &ProfileCard {
        &self.profile
    }

    pub fn draft(&self) -> Option<&ProfileCard> {
        match &self.phase {
            Phase::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// True while a connect (and its follow-up load) is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Ask the wallet for its active address, then load that profile.
    pub async fn connect(&mut self) -> Result<String, SessionError> {
        if let Some(address) = self.address() {
            return Ok(address.to_string());
        }

        let wallet = self.wallet.clone().ok_or(SessionError::NoWalletFound)?;

        self.phase = Phase::Connecting;
        self.loading = true;

        let address = match wallet::active_address(wallet.as_ref()).await {
            Ok(address) => address,
            Err(e) => {
                warn!("Wallet connection failed: {}", e);
                self.phase = Phase::Disconnected;
                self.loading = false;
                return Err(e.into());
            }
        };

        info!("Wallet connected: {}", address);
        self.phase = Phase::Connected { address: address.clone() };
        self.load(&address).await;
        self.loading = false;

        Ok(address)
    }

    /// Fetch the profile for `address` and display it. Failures keep the
    /// current local profile and are only logged. An open draft is never
    /// replaced by a load.
    pub async fn load(&mut self, address: &str) -> bool {
        match self.api.fetch(address).await {
            Ok(profile) => {
                debug!("Loaded profile for {}", address);
                self.profile = profile.into();
                true
            }
            Err(e) => {
                warn!("Profile API unavailable, keeping local profile: {}", e);
                false
            }
        }
    }

    /// Snapshot the displayed profile into an editable draft.
    pub fn begin_edit(&mut self) -> Result<(), SessionError> {
        match std::mem::replace(&mut self.phase, Phase::Disconnected) {
            Phase::Connected { address } => {
                let draft = self.profile.clone();
                self.phase = Phase::Editing { address, draft };
                Ok(())
            }
            editing @ Phase::Editing { .. } => {
                self.phase = editing;
                Ok(())
            }
            other => {
                self.phase = other;
                Err(SessionError::NotConnected)
            }
        }
    }

    pub fn update_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        match &mut self.phase {
            Phase::Editing { draft, .. } => {
                draft.set_field(field, value);
                Ok(())
            }
            _ => Err(SessionError::NotEditing),
        }
    }

    /// [`Session::update_field`] addressed by wire field name.
    pub fn update_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let field = name.parse::<ProfileField>()?;
        self.update_field(field, value)
    }

    /// Persist the draft. On success the server's row replaces both the
    /// draft and the displayed profile; on failure the draft is kept.
    pub async fn save(&mut self) -> Result<(), SessionError> {
        let (address, draft) = match &self.phase {
            Phase::Editing { address, draft } => (address.clone(), draft.clone()),
            Phase::Connected { .. } => return Err(SessionError::NotEditing),
            Phase::Disconnected | Phase::Connecting => return Err(SessionError::NotConnected),
        };

        match self.api.save(&draft.to_upsert(&address)).await {
            Ok(stored) => {
                info!("Saved profile for {}", address);
                self.profile = stored.into();
                self.phase = Phase::Connected { address };
                Ok(())
            }
            Err(e) => {
                error!("Failed to save profile for {}: {}", address, e);
                Err(e)
            }
        }
    }

    /// Drop the draft without saving.
    pub fn cancel_edit(&mut self) {
        if let Phase::Editing { address, .. } = &self.phase {
            self.phase = Phase::Connected { address: address.clone() };
        }
    }
}
