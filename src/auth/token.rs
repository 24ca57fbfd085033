// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token extraction from the `Authorization` header.
//!
//! Session tokens are opaque strings issued by the session service. Nothing
//! here parses or validates the token itself; a header that is missing or
//! not shaped exactly like `Bearer <token>` simply yields no token, which
//! callers treat as an anonymous request.

use axum::http::{header::AUTHORIZATION, HeaderMap};

/// The only accepted authorization scheme, matched case-sensitively.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the bearer token from a request's headers.
///
/// Returns `Some(token)` only for a header of the exact form
/// `Bearer <token>` (single space, case-sensitive scheme). Every other
/// shape, including a missing or non-UTF-8 header value, returns `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split(' ');
    let scheme = parts.next()?;
    let token = parts.next()?;

    // Exactly two space-separated fields, nothing trailing.
    if scheme != BEARER_SCHEME || token.is_empty() || parts.next().is_some() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn well_formed_header_yields_token() {
        assert_eq!(bearer_token(&headers_with("Bearer abc123")), Some("abc123"));
    }

    #[test]
    fn wrong_scheme_yields_none() {
        assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert_eq!(bearer_token(&headers_with("bearer abc123")), None);
        assert_eq!(bearer_token(&headers_with("BEARER abc123")), None);
    }

    #[test]
    fn extra_fields_yield_none() {
        assert_eq!(bearer_token(&headers_with("Bearer abc 123")), None);
    }

    #[test]
    fn scheme_without_token_yields_none() {
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    }
}
