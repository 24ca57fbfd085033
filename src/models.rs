// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the wallet surface. All types derive
//! `Serialize`, `Deserialize`, and `ToSchema` for automatic JSON handling
//! and OpenAPI documentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A trading wallet belonging to a client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Wallet {
    /// Unique wallet identifier.
    pub id: String,
    /// Asset held by this wallet (e.g. `BTC`, `USD`).
    pub asset_id: String,
    /// User-facing wallet name.
    pub name: String,
    /// Current balance in asset units.
    pub balance: f64,
    /// When the wallet was created.
    pub created_at: DateTime<Utc>,
}

/// Request to create a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateWalletRequest {
    /// Asset the wallet will hold.
    pub asset_id: String,
    /// User-facing wallet name.
    pub name: String,
}
