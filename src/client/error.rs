// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use super::wallet::WalletError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No Wallet Found! Install Rabby or MetaMask.")]
    NoWalletFound,

    #[error("wallet connection was rejected")]
    UserRejected,

    #[error("Connect first!")]
    NotConnected,

    #[error("no profile is being edited")]
    NotEditing,

    #[error("unknown profile field '{0}'")]
    UnknownField(String),

    #[error("profile service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("invalid profile API URL '{0}'")]
    InvalidEndpoint(String),
}

impl From<WalletError> for SessionError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::UserRejected(_) | WalletError::NoAccounts => SessionError::UserRejected,
        }
    }
}

impl From<reqwest::Error> for SessionError {
    fn from(err: reqwest::Error) -> Self {
        SessionError::ServiceUnavailable(err.to_string())
    }
}
