// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Wallet API - Session-Authenticated Account Gateway
//!
//! REST surface for wallet/trading accounts. Requests authenticate with an
//! opaque bearer session token; the token is resolved to a principal via a
//! process-local claims cache backed by the external session service.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Bearer token extraction, claims cache, session resolution
//! - `store` - In-memory per-client wallet store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
