// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::session::SessionServiceError;

/// Authentication error type.
///
/// A missing or malformed token is not in this taxonomy at all: the
/// resolver reports it as "no principal" and endpoint policy decides what
/// that means. These variants only cover requests that had to be rejected.
#[derive(Debug)]
pub enum AuthError {
    /// No principal could be resolved for a route that requires one
    Unauthenticated,
    /// The session service could not be reached to validate the token
    SessionServiceUnavailable(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated => "unauthenticated",
            AuthError::SessionServiceUnavailable(_) => "session_service_unavailable",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::SessionServiceUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<SessionServiceError> for AuthError {
    fn from(err: SessionServiceError) -> Self {
        AuthError::SessionServiceUnavailable(err.to_string())
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Unauthenticated => {
                write!(f, "A valid bearer session token is required")
            }
            AuthError::SessionServiceUnavailable(msg) => {
                write!(f, "Session validation failed: {msg}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}
