// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session introspection and logout.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::auth::{token::bearer_token, Auth, Principal};
use crate::state::AppState;

/// Return the resolved principal for the current session.
#[utoipa::path(
    get,
    path = "/v1/client/session",
    tag = "Session",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Resolved principal for the presented token", body = Principal),
        (status = 401, description = "No valid session token presented")
    )
)]
pub async fn get_session(Auth(principal): Auth) -> Json<Principal> {
    Json(principal.as_ref().clone())
}

/// Log the current session out of this API instance.
///
/// Drops the cached principal for the presented token so the next request
/// re-validates against the session service. The session itself is revoked
/// by the session service through its own logout flow; this endpoint only
/// guarantees the local cache will not outlive it by more than one request.
#[utoipa::path(
    post,
    path = "/v1/client/session/logout",
    tag = "Session",
    security(("bearer_token" = [])),
    responses(
        (status = 204, description = "Cached principal invalidated"),
        (status = 401, description = "No valid session token presented")
    )
)]
pub async fn logout(
    Auth(_principal): Auth,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> StatusCode {
    // Auth succeeded, so a well-formed bearer token is present.
    if let Some(token) = bearer_token(&headers) {
        state.resolver.invalidate(token).await;
    }
    StatusCode::NO_CONTENT
}
