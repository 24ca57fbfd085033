// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Time-boxed claims cache keyed by opaque session token.
//!
//! One cache per process, constructed explicitly at startup and shared via
//! `Arc` — never a language-level singleton, so tests can build isolated
//! instances. The session service stays the source of truth; the only hard
//! guarantee here is that an entry older than the expiry window is never
//! returned. Staleness is checked synchronously on every read, there is no
//! background eviction, and the cache is empty again after a restart.
//!
//! ## Concurrency
//!
//! Reads share the read lock, so lookups for disjoint tokens proceed in
//! parallel. A read that discovers a stale entry upgrades to the write lock
//! to evict it, re-checking freshness after the upgrade because a concurrent
//! `set` may have refreshed the entry in between. `set` and `invalidate`
//! take the write lock for the duration of the mutation. No ordering is
//! promised between a `set` and a racing `get` for the same token;
//! last writer wins.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use super::claims::Principal;

/// Default expiry window for cached principals (60 seconds).
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(60);

struct CacheEntry {
    principal: Arc<Principal>,
    refreshed_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self, expiry: Duration) -> bool {
        self.refreshed_at.elapsed() < expiry
    }
}

/// Process-wide cache of resolved principals.
pub struct ClaimsCache {
    expiry: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ClaimsCache {
    /// Create a cache with the default 60 second expiry window.
    pub fn new() -> Self {
        Self::with_expiry(DEFAULT_EXPIRY)
    }

    /// Create a cache with a custom expiry window.
    ///
    /// The window is fixed for the lifetime of the cache.
    pub fn with_expiry(expiry: Duration) -> Self {
        Self {
            expiry,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up the principal for `token`.
    ///
    /// Returns the cached principal only while the entry is younger than the
    /// expiry window. A stale entry is evicted on the spot and reported as a
    /// miss.
    pub async fn get(&self, token: &str) -> Option<Arc<Principal>> {
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                Some(entry) if entry.is_fresh(self.expiry) => {
                    return Some(Arc::clone(&entry.principal));
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Stale entry: upgrade to the write lock and evict, unless a
        // concurrent set refreshed it while we were waiting.
        let mut entries = self.entries.write().await;
        match entries.get(token) {
            Some(entry) if entry.is_fresh(self.expiry) => Some(Arc::clone(&entry.principal)),
            Some(_) => {
                entries.remove(token);
                None
            }
            None => None,
        }
    }

    /// Insert or overwrite the entry for `token`, timestamped now.
    ///
    /// Last writer wins; claims are never merged.
    pub async fn set(&self, token: &str, principal: Arc<Principal>) {
        let mut entries = self.entries.write().await;
        entries.insert(
            token.to_string(),
            CacheEntry {
                principal,
                refreshed_at: Instant::now(),
            },
        );
    }

    /// Remove any entry for `token`. Idempotent if absent.
    pub async fn invalidate(&self, token: &str) {
        let mut entries = self.entries.write().await;
        entries.remove(token);
    }

    /// Number of live entries, stale or not. Used by the readiness probe.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for ClaimsCache {
    fn default() -> Self {
        Self::new()
    }
}
