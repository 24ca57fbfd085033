// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! Applied to a router subtree with
//! `axum::middleware::from_fn_with_state(state, auth_middleware)`, this
//! resolves the principal once per request and stores it in the request
//! extensions, where the `Auth` extractor picks it up without a second
//! cache lookup. Routes outside the subtree (health, docs) stay anonymous.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{AuthError, Principal};
use crate::state::AppState;

/// Resolve the request's principal and reject anonymous requests.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let principal = match state.resolver.resolve(request.headers()).await {
        Ok(Some(principal)) => principal,
        Ok(None) => return AuthError::Unauthenticated.into_response(),
        Err(err) => return AuthError::from(err).into_response(),
    };

    request.extensions_mut().insert::<Arc<Principal>>(principal);
    next.run(request).await
}
