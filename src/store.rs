// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory wallet store keyed by client identifier.
//!
//! A thin stand-in for the account aggregation backends; it exists so the
//! protected routes serve real per-client data. The authenticated
//! principal's client id is the only key, so one client can never read
//! another's wallets.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateWalletRequest, Wallet};

#[derive(Default)]
pub struct WalletStore {
    wallets: HashMap<String, Vec<Wallet>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All wallets owned by `client_id`.
    pub fn list_wallets(&self, client_id: &str) -> Vec<Wallet> {
        self.wallets.get(client_id).cloned().unwrap_or_default()
    }

    /// Create a wallet for `client_id` with a zero opening balance.
    pub fn create_wallet(&mut self, client_id: &str, request: CreateWalletRequest) -> Wallet {
        let wallet = Wallet {
            id: Uuid::new_v4().to_string(),
            asset_id: request.asset_id,
            name: request.name,
            balance: 0.0,
            created_at: Utc::now(),
        };
        self.wallets
            .entry(client_id.to_string())
            .or_default()
            .push(wallet.clone());
        wallet
    }

    /// Look up one of `client_id`'s wallets by id.
    pub fn wallet_by_id(&self, client_id: &str, wallet_id: &str) -> Result<Wallet, ApiError> {
        self.wallets
            .get(client_id)
            .and_then(|wallets| wallets.iter().find(|wallet| wallet.id == wallet_id))
            .cloned()
            .ok_or_else(|| ApiError::not_found("Wallet not found"))
    }
}
