// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::{middleware::auth_middleware, Principal},
    models::{CreateWalletRequest, Wallet},
    state::AppState,
};

pub mod health;
pub mod session;
pub mod wallets;

pub fn router(state: AppState) -> Router {
    // Everything under /v1 requires a resolved principal; the middleware
    // stores it in request extensions for the Auth extractor.
    let v1_routes = Router::new()
        .route("/client/session", get(session::get_session))
        .route("/client/session/logout", post(session::logout))
        .route(
            "/wallets",
            get(wallets::list_wallets).post(wallets::create_wallet),
        )
        .route("/wallets/{wallet_id}", get(wallets::get_wallet))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(health_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        health::liveness,
        health::readiness,
        session::get_session,
        session::logout,
        wallets::list_wallets,
        wallets::create_wallet,
        wallets::get_wallet
    ),
    components(
        schemas(
            Principal,
            Wallet,
            CreateWalletRequest,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Session", description = "Session introspection and logout"),
        (name = "Wallets", description = "Client wallet management")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Opaque session token issued by the session service"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{ClientSession, SessionService, SessionServiceError};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Session service double: one confirmed session, call counting.
    struct OneSession {
        calls: AtomicUsize,
        fail: bool,
    }

    impl OneSession {
        fn healthy() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn broken() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: true,
            })
        }
    }

    #[async_trait::async_trait]
    impl SessionService for OneSession {
        async fn get_session(
            &self,
            token: &str,
        ) -> Result<Option<ClientSession>, SessionServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SessionServiceError::UnexpectedStatus(503));
            }
            if token == "abc123" {
                Ok(Some(ClientSession {
                    client_id: "42".to_string(),
                    partner_id: None,
                    pinned: false,
                    is_session_confirmed: true,
                }))
            } else {
                Ok(None)
            }
        }
    }

    fn get_request(uri: &str, auth: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::for_tests(OneSession::healthy()));
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = router(AppState::for_tests(OneSession::healthy()));
        let response = app.oneshot(get_request("/health/live", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_endpoint_returns_resolved_principal() {
        let sessions = OneSession::healthy();
        let state = AppState::for_tests(Arc::clone(&sessions) as Arc<dyn SessionService>);
        let app = router(state);

        let response = app
            .clone()
            .oneshot(get_request("/v1/client/session", Some("Bearer abc123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let principal: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(principal["client_id"], "42");
        assert_eq!(principal["auth_type"], "Bearer");
        assert_eq!(principal["claims"]["session-confirmed"], "True");
        assert!(principal["claims"].get("partner-id").is_none());
        assert!(principal["claims"].get("token-type").is_none());
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 1);

        // Second request within the expiry window is served from cache.
        let response = app
            .oneshot(get_request("/v1/client/session", Some("Bearer abc123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected_and_retried_upstream() {
        let sessions = OneSession::healthy();
        let state = AppState::for_tests(Arc::clone(&sessions) as Arc<dyn SessionService>);
        let app = router(state);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(get_request("/v1/client/session", Some("Bearer xyz")))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        // No negative caching: both requests hit the session service.
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn wrong_scheme_is_rejected_without_external_call() {
        let sessions = OneSession::healthy();
        let state = AppState::for_tests(Arc::clone(&sessions) as Arc<dyn SessionService>);
        let app = router(state);

        let response = app
            .oneshot(get_request("/v1/client/session", Some("Basic abc123")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn session_service_outage_surfaces_as_502() {
        let app = router(AppState::for_tests(OneSession::broken()));

        let response = app
            .oneshot(get_request("/v1/wallets", Some("Bearer abc123")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn wallet_flow_create_then_list() {
        let app = router(AppState::for_tests(OneSession::healthy()));

        let create = Request::builder()
            .method("POST")
            .uri("/v1/wallets")
            .header("Authorization", "Bearer abc123")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"asset_id":"BTC","name":"Savings"}"#))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(get_request("/v1/wallets", Some("Bearer abc123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let wallets: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(wallets.as_array().unwrap().len(), 1);
        assert_eq!(wallets[0]["asset_id"], "BTC");
        assert_eq!(wallets[0]["balance"], 0.0);
    }

    #[tokio::test]
    async fn logout_then_next_request_revalidates() {
        let sessions = OneSession::healthy();
        let state = AppState::for_tests(Arc::clone(&sessions) as Arc<dyn SessionService>);
        let app = router(state);

        let response = app
            .clone()
            .oneshot(get_request("/v1/client/session", Some("Bearer abc123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let logout = Request::builder()
            .method("POST")
            .uri("/v1/client/session/logout")
            .header("Authorization", "Bearer abc123")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(logout).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request("/v1/client/session", Some("Bearer abc123")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // resolve, (logout hit the middleware too: cached), re-resolve
        assert_eq!(sessions.calls.load(Ordering::SeqCst), 2);
    }
}
