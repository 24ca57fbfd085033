// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session service collaborator.
//!
//! The session service is the source of truth for whether a bearer token
//! maps to an active session. The resolver only needs one operation from it,
//! expressed as the [`SessionService`] trait so tests can substitute an
//! in-memory double for the HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Client timeout for session lookups (10 seconds).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Active session as reported by the session service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSession {
    /// Stable client identifier owning the session.
    pub client_id: String,
    /// Partner the session was opened under, if any.
    #[serde(default)]
    pub partner_id: Option<String>,
    /// Whether the token is pinned to a device.
    #[serde(default)]
    pub pinned: bool,
    /// Whether the session has been confirmed (e.g. second factor passed).
    #[serde(default)]
    pub is_session_confirmed: bool,
}

/// Failure talking to the session service.
///
/// These are transport-level failures; an unknown token is not an error and
/// is reported as `Ok(None)` by [`SessionService::get_session`].
#[derive(Debug, Error)]
pub enum SessionServiceError {
    /// The request could not be sent or the response not read.
    #[error("session service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an unexpected status.
    #[error("session service returned HTTP {0}")]
    UnexpectedStatus(u16),
}

/// Lookup contract against the session service.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Resolve `token` to its active session.
    ///
    /// `Ok(None)` means the token is unknown or the session has expired
    /// upstream. `Err` means the service could not be asked at all.
    async fn get_session(&self, token: &str) -> Result<Option<ClientSession>, SessionServiceError>;
}

/// HTTP implementation of [`SessionService`].
pub struct HttpSessionService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSessionService {
    /// Create a client against the given base URL
    /// (e.g. `https://session.internal:5012`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SessionService for HttpSessionService {
    async fn get_session(&self, token: &str) -> Result<Option<ClientSession>, SessionServiceError> {
        let url = format!("{}/api/sessions/{token}", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SessionServiceError::UnexpectedStatus(
                response.status().as_u16(),
            ));
        }

        let session = response.json::<ClientSession>().await?;
        Ok(Some(session))
    }
}
