// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{env, net::SocketAddr, sync::Arc};

use tracing::info;
use tracing_subscriber::EnvFilter;

use relational_wallet_api::api::router;
use relational_wallet_api::auth::{ClaimsCache, HttpSessionService};
use relational_wallet_api::config::{
    session_cache_ttl, DEFAULT_LOG_FILTER, SESSION_SERVICE_URL_ENV,
};
use relational_wallet_api::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    // The session service is the source of truth for every bearer token;
    // refuse to start without it.
    let session_service_url = env::var(SESSION_SERVICE_URL_ENV)
        .unwrap_or_else(|_| panic!("{SESSION_SERVICE_URL_ENV} must be set"));

    let cache_ttl = session_cache_ttl();
    info!(
        session_service = %session_service_url,
        cache_ttl_secs = cache_ttl.as_secs(),
        "starting wallet API"
    );

    let sessions = Arc::new(HttpSessionService::new(session_service_url));
    let state = AppState::new(sessions, ClaimsCache::with_expiry(cache_ttl));
    let app = router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .expect("Failed to parse bind address");

    info!("wallet API listening on http://{addr} (docs at /docs)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("HTTP server failed");
}

/// Initialise tracing from `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolve on ctrl-c or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
