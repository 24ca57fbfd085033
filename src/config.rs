// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup; nothing is hot-reloaded.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SESSION_SERVICE_URL` | Base URL of the session service | Required |
//! | `SESSION_CACHE_TTL_SECS` | Claims cache expiry window in seconds | `60` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::time::Duration;

/// Environment variable for the session service base URL.
///
/// The session service is the source of truth for bearer tokens; without it
/// no request can be authenticated, so the variable is mandatory.
pub const SESSION_SERVICE_URL_ENV: &str = "SESSION_SERVICE_URL";

/// Environment variable for the claims cache expiry window, in seconds.
pub const SESSION_CACHE_TTL_ENV: &str = "SESSION_CACHE_TTL_SECS";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Claims cache expiry window from the environment, falling back to the
/// 60 second default on absent or unparsable values.
pub fn session_cache_ttl() -> Duration {
    std::env::var(SESSION_CACHE_TTL_ENV)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(crate::auth::cache::DEFAULT_EXPIRY)
}
