// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Bearer session token authentication for the wallet API.
//!
//! ## Auth Flow
//!
//! 1. Client logs in against the session service and receives an opaque
//!    session token
//! 2. Client sends `Authorization: Bearer <token>` on every request
//! 3. API server:
//!    - extracts the token (anything but `Bearer <token>` is anonymous)
//!    - serves the principal from the claims cache while the entry is
//!      younger than the expiry window
//!    - on a miss, asks the session service and caches the resolved
//!      principal
//!
//! ## Properties
//!
//! - Unknown tokens are never cached, so a revoked session is rejected on
//!   the very next miss
//! - Session service failures fail the request (fail closed, 502)
//! - Logout invalidates the cache entry for the presented token

pub mod cache;
pub mod claims;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod resolver;
pub mod session;
pub mod token;

pub use cache::ClaimsCache;
pub use claims::Principal;
pub use error::AuthError;
pub use extractor::{Auth, OptionalAuth};
pub use resolver::SessionResolver;
pub use session::{ClientSession, HttpSessionService, SessionService, SessionServiceError};
