// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Resolved principal and its claim bag.
//!
//! A [`Principal`] is built once from a session service lookup and then
//! shared immutably (`Arc<Principal>`) between the claims cache and every
//! request that resolves the same token. Claims are a plain string-to-string
//! map rather than a framework identity type.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::session::ClientSession;
use super::token::BEARER_SCHEME;

/// Claim name for the session-confirmed flag. Always present.
pub const CLAIM_SESSION_CONFIRMED: &str = "session-confirmed";

/// Claim name for the partner identifier. Present only when the session
/// carries one.
pub const CLAIM_PARTNER_ID: &str = "partner-id";

/// Claim name for the token type. Present only for pinned tokens.
pub const CLAIM_TOKEN_TYPE: &str = "token-type";

/// Claim value marking a pinned token.
pub const TOKEN_TYPE_PINNED: &str = "Pinned";

/// The authenticated identity behind a session token.
///
/// Immutable once constructed; concurrent readers share it by reference
/// through the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Principal {
    /// Stable client identifier (the principal's name).
    pub client_id: String,
    /// Authentication scheme tag, always `Bearer`.
    pub auth_type: String,
    /// When this principal was resolved.
    pub issued_at: DateTime<Utc>,
    /// Claim bag attached to the identity.
    pub claims: BTreeMap<String, String>,
}

impl Principal {
    /// Build a principal from a session service lookup result.
    ///
    /// The session-confirmed flag is always recorded, as a capitalised
    /// boolean string. Partner and pinned claims are added only when the
    /// session carries them.
    pub fn from_session(session: ClientSession) -> Arc<Self> {
        let mut claims = BTreeMap::new();
        claims.insert(
            CLAIM_SESSION_CONFIRMED.to_string(),
            bool_claim(session.is_session_confirmed),
        );

        if let Some(partner_id) = session.partner_id {
            claims.insert(CLAIM_PARTNER_ID.to_string(), partner_id);
        }

        if session.pinned {
            claims.insert(CLAIM_TOKEN_TYPE.to_string(), TOKEN_TYPE_PINNED.to_string());
        }

        Arc::new(Self {
            client_id: session.client_id,
            auth_type: BEARER_SCHEME.to_string(),
            issued_at: Utc::now(),
            claims,
        })
    }

    /// Look up a single claim value.
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims.get(name).map(String::as_str)
    }

    /// Whether the session behind this principal was confirmed.
    pub fn is_session_confirmed(&self) -> bool {
        self.claim(CLAIM_SESSION_CONFIRMED) == Some("True")
    }

    /// Partner identifier, if the session carried one.
    pub fn partner_id(&self) -> Option<&str> {
        self.claim(CLAIM_PARTNER_ID)
    }
}

/// Capitalised boolean-as-string claim encoding (`True` / `False`).
fn bool_claim(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> ClientSession {
        ClientSession {
            client_id: "42".to_string(),
            partner_id: None,
            pinned: false,
            is_session_confirmed: true,
        }
    }

    #[test]
    fn confirmed_session_gets_capitalised_claim() {
        let principal = Principal::from_session(sample_session());
        assert_eq!(principal.client_id, "42");
        assert_eq!(principal.auth_type, "Bearer");
        assert_eq!(principal.claim(CLAIM_SESSION_CONFIRMED), Some("True"));
        assert!(principal.is_session_confirmed());
    }

    #[test]
    fn unconfirmed_session_gets_false_claim() {
        let mut session = sample_session();
        session.is_session_confirmed = false;
        let principal = Principal::from_session(session);
        assert_eq!(principal.claim(CLAIM_SESSION_CONFIRMED), Some("False"));
        assert!(!principal.is_session_confirmed());
    }

    #[test]
    fn partner_claim_only_when_present() {
        let principal = Principal::from_session(sample_session());
        assert_eq!(principal.partner_id(), None);

        let mut session = sample_session();
        session.partner_id = Some("partner-7".to_string());
        let principal = Principal::from_session(session);
        assert_eq!(principal.partner_id(), Some("partner-7"));
    }

    #[test]
    fn pinned_claim_only_for_pinned_tokens() {
        let principal = Principal::from_session(sample_session());
        assert_eq!(principal.claim(CLAIM_TOKEN_TYPE), None);

        let mut session = sample_session();
        session.pinned = true;
        let principal = Principal::from_session(session);
        assert_eq!(principal.claim(CLAIM_TOKEN_TYPE), Some(TOKEN_TYPE_PINNED));
    }
}
