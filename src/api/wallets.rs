// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet routes, scoped to the authenticated client.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{CreateWalletRequest, Wallet};
use crate::state::AppState;

/// List the authenticated client's wallets.
#[utoipa::path(
    get,
    path = "/v1/wallets",
    tag = "Wallets",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Wallets owned by the client", body = [Wallet]),
        (status = 401, description = "No valid session token presented")
    )
)]
pub async fn list_wallets(
    Auth(principal): Auth,
    State(state): State<AppState>,
) -> Json<Vec<Wallet>> {
    let store = state.wallets.read().await;
    Json(store.list_wallets(&principal.client_id))
}

/// Create a wallet for the authenticated client.
#[utoipa::path(
    post,
    path = "/v1/wallets",
    tag = "Wallets",
    security(("bearer_token" = [])),
    request_body = CreateWalletRequest,
    responses(
        (status = 201, description = "Wallet created", body = Wallet),
        (status = 401, description = "No valid session token presented")
    )
)]
pub async fn create_wallet(
    Auth(principal): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateWalletRequest>,
) -> (StatusCode, Json<Wallet>) {
    let mut store = state.wallets.write().await;
    let wallet = store.create_wallet(&principal.client_id, request);
    (StatusCode::CREATED, Json(wallet))
}

/// Fetch a single wallet by id.
#[utoipa::path(
    get,
    path = "/v1/wallets/{wallet_id}",
    tag = "Wallets",
    security(("bearer_token" = [])),
    params(("wallet_id" = String, Path, description = "Wallet identifier")),
    responses(
        (status = 200, description = "The wallet", body = Wallet),
        (status = 401, description = "No valid session token presented"),
        (status = 404, description = "No such wallet for this client")
    )
)]
pub async fn get_wallet(
    Auth(principal): Auth,
    State(state): State<AppState>,
    Path(wallet_id): Path<String>,
) -> Result<Json<Wallet>, ApiError> {
    let store = state.wallets.read().await;
    let wallet = store.wallet_by_id(&principal.client_id, &wallet_id)?;
    Ok(Json(wallet))
}
