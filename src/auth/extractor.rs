// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractors for authenticated clients.
//!
//! Use the `Auth` extractor in handlers to require a resolved principal:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(principal): Auth) -> impl IntoResponse {
//!     // principal is Arc<Principal>
//! }
//! ```

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthError, Principal};
use crate::state::AppState;

/// Extractor that requires an authenticated principal.
///
/// The request's bearer token is resolved through the claims cache and, on
/// a miss, the session service. Anonymous or unknown tokens are rejected
/// with 401; a session service outage fails the request with 502 rather
/// than falling open.
pub struct Auth(pub Arc<Principal>);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // The auth middleware may already have resolved the principal.
        if let Some(principal) = parts.extensions.get::<Arc<Principal>>().cloned() {
            return Ok(Auth(principal));
        }

        let principal = state
            .resolver
            .resolve(&parts.headers)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        // Share with any later extractor on the same request.
        parts.extensions.insert(Arc::clone(&principal));

        Ok(Auth(principal))
    }
}

/// Optional authentication extractor.
///
/// Resolves the principal when a valid session token is presented and
/// yields `None` for anonymous requests instead of rejecting. A session
/// service failure still fails the request: a token was presented and could
/// not be validated.
pub struct OptionalAuth(pub Option<Arc<Principal>>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<Arc<Principal>>().cloned() {
            return Ok(OptionalAuth(Some(principal)));
        }

        let principal = state.resolver.resolve(&parts.headers).await?;
        if let Some(ref principal) = principal {
            parts.extensions.insert(Arc::clone(principal));
        }

        Ok(OptionalAuth(principal))
    }
}
