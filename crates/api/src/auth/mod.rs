//! Bearer-token authentication.
//!
//! The gateway consults a pluggable [`Authenticator`] held in `AppState`;
//! production uses [`JwksAuthenticator`], which validates RS256 tokens
//! against an external key-set endpoint. Tests inject their own
//! implementation through the same trait.

pub mod jwks;

use async_trait::async_trait;
use serde::Deserialize;
use tasknote_core::error::CoreError;

pub use jwks::JwksAuthenticator;

/// Claims extracted from a validated access token.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject -- the caller's identity at the token issuer.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp), checked during validation.
    pub exp: i64,
}

/// Verifies a bearer credential before a request is dispatched.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Validate the raw bearer token, returning its claims.
    async fn authenticate(&self, token: &str) -> Result<Claims, CoreError>;
}
