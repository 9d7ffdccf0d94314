//! Shared harness for HTTP-level integration tests.
//!
//! Builds the real application router (same middleware stack as `main.rs`)
//! with an HS256 test authenticator swapped in through the [`Authenticator`]
//! trait, and provides request helpers driving the router via
//! `tower::ServiceExt` without a TCP listener.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::PgPool;
use tower::ServiceExt;

use tasknote_api::auth::jwks::AuthConfig;
use tasknote_api::auth::{Authenticator, Claims};
use tasknote_api::config::ServerConfig;
use tasknote_api::router::build_app_router;
use tasknote_api::service::TodoService;
use tasknote_api::state::AppState;
use tasknote_core::error::CoreError;

/// Symmetric secret for test tokens. Only the tests know it; production
/// always validates against a key-set endpoint.
const TEST_SECRET: &[u8] = b"integration-test-secret";

/// HS256 authenticator for tests, injected through the same seam production
/// uses for JWKS validation. No network involved.
struct TestAuthenticator;

#[async_trait]
impl Authenticator for TestAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Claims, CoreError> {
        let token_data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(TEST_SECRET),
            &Validation::default(),
        )
        .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;
        Ok(token_data.claims)
    }
}

/// Mint a bearer token the test authenticator accepts.
pub fn auth_token() -> String {
    let claims = serde_json::json!({
        "sub": "auth0|integration-test-user",
        "exp": Utc::now().timestamp() + 600,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("token encoding should succeed")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        auth: AuthConfig {
            jwks_url: "http://localhost:1/jwks.json".to_string(),
            issuer: None,
            audience: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the wiring in `main.rs` so integration tests exercise the
/// same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        service: TodoService::new(pool),
        authenticator: Arc::new(TestAuthenticator),
    };

    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET without credentials.
pub async fn get(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

/// GET with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::GET, path, None, Some(token)).await
}

/// POST a JSON body without credentials.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, Some(body), None).await
}

/// POST a JSON body with a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, path, Some(body), Some(token)).await
}

/// PATCH a JSON body with a bearer token.
pub async fn patch_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PATCH, path, Some(body), Some(token)).await
}

/// PATCH with no body (the `/done` sub-route) and a bearer token.
pub async fn patch_auth(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::PATCH, path, None, Some(token)).await
}

/// DELETE with a bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response {
    send(app, Method::DELETE, path, None, Some(token)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
