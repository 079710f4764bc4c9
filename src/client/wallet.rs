// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum WalletError {
    #[error("user rejected the request: {0}")]
    UserRejected(String),

    #[error("wallet returned no accounts")]
    NoAccounts,
}

/// The browser-injected wallet capability, used only to learn the
/// holder's address.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Prompt for permission and return the authorised accounts, active
    /// account first.
    async fn request_accounts(&self) -> Result<Vec<String>, WalletError>;
}

/// Ask `wallet` for its active address.
pub async fn active_address(wallet: &dyn Wallet) -> Result<String, WalletError> {
    wallet
        .request_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccounts)
}
