// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer-token-to-principal resolution.
//!
//! On a cache hit a request costs no I/O at all; on a miss exactly one
//! session service call is made and the result is cached for the expiry
//! window. Unknown tokens are never cached (no negative caching), so a
//! retried bad token asks the session service again. Concurrent misses for
//! the same token may each call the service; both resolutions converge on
//! `set` and the last writer wins. There is deliberately no single-flight
//! deduplication around the external call: a hung lookup must not block an
//! unrelated request for the same token.

use std::sync::Arc;

use axum::http::HeaderMap;
use tracing::debug;

use super::cache::ClaimsCache;
use super::claims::Principal;
use super::session::{SessionService, SessionServiceError};
use super::token::bearer_token;

/// Resolves the current request's principal from its bearer token.
pub struct SessionResolver {
    sessions: Arc<dyn SessionService>,
    cache: Arc<ClaimsCache>,
}

impl SessionResolver {
    pub fn new(sessions: Arc<dyn SessionService>, cache: Arc<ClaimsCache>) -> Self {
        Self { sessions, cache }
    }

    /// Resolve the principal for a request, if it presents a valid session.
    ///
    /// `Ok(None)` covers both the anonymous case (no usable bearer token in
    /// the headers) and an unknown/expired token. A session service failure
    /// is not swallowed: authentication fails closed and the error crosses
    /// this boundary unchanged.
    pub async fn resolve(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<Arc<Principal>>, SessionServiceError> {
        let Some(token) = bearer_token(headers) else {
            return Ok(None);
        };
        self.resolve_token(token).await
    }

    /// Resolve an already-extracted token.
    pub async fn resolve_token(
        &self,
        token: &str,
    ) -> Result<Option<Arc<Principal>>, SessionServiceError> {
        if let Some(principal) = self.cache.get(token).await {
            return Ok(Some(principal));
        }

        let Some(session) = self.sessions.get_session(token).await? else {
            debug!("session service does not know this token");
            return Ok(None);
        };

        let principal = Principal::from_session(session);
        self.cache.set(token, Arc::clone(&principal)).await;

        debug!(client_id = %principal.client_id, "resolved principal from session service");
        Ok(Some(principal))
    }

    /// Drop the cached principal for `token`.
    ///
    /// Called by logout and credential-change flows; the next request with
    /// this token re-validates against the session service.
    pub async fn invalidate(&self, token: &str) {
        self.cache.invalidate(token).await;
    }

    /// The cache backing this resolver.
    pub fn cache(&self) -> &ClaimsCache {
        &self.cache
    }
}
