// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

//! Browser-side session: wallet pseudo-login, fetch-on-connect and
//! save-on-edit against the profile API.

pub mod api;
pub mod error;
pub mod profile;
pub mod session;
pub mod wallet;

pub use api::{HttpProfileApi, ProfileApi};
pub use error::SessionError;
pub use profile::{ProfileCard, ProfileField};
pub use session::{Session, SessionState};
pub use wallet::{Wallet, WalletError};
