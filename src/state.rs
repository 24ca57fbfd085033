// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{ClaimsCache, SessionResolver, SessionService};
use crate::store::WalletStore;

/// Shared application state, constructed once in `main` and cloned into
/// every handler. The claims cache lives inside the resolver and is built
/// explicitly here, so tests can construct isolated instances.
#[derive(Clone)]
pub struct AppState {
    /// Token-to-principal resolution (claims cache + session service).
    pub resolver: Arc<SessionResolver>,
    /// Direct handle to the session service, used by the readiness probe.
    pub sessions: Arc<dyn SessionService>,
    /// Per-client wallet summaries.
    pub wallets: Arc<RwLock<WalletStore>>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionService>, cache: ClaimsCache) -> Self {
        let cache = Arc::new(cache);
        Self {
            resolver: Arc::new(SessionResolver::new(Arc::clone(&sessions), cache)),
            sessions,
            wallets: Arc::new(RwLock::new(WalletStore::new())),
        }
    }

    /// State with a default-expiry cache, for tests that inject a session
    /// service double.
    #[cfg(test)]
    pub fn for_tests(sessions: Arc<dyn SessionService>) -> Self {
        Self::new(sessions, ClaimsCache::new())
    }
}
