//! JWKS-backed token validation.
//!
//! Decoding keys are fetched from the configured key-set endpoint and cached
//! by `kid`; a token with an unknown `kid` triggers one refresh before it is
//! rejected, so issuer key rotation does not require a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use tasknote_core::error::CoreError;
use tokio::sync::RwLock;

use super::{Authenticator, Claims};

/// Configuration for JWKS-backed authentication.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// URL of the issuer's JSON Web Key Set.
    pub jwks_url: String,
    /// Expected `iss` claim, when set.
    pub issuer: Option<String>,
    /// Expected `aud` claim, when set.
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Load auth configuration from environment variables.
    ///
    /// | Env Var         | Required | Default |
    /// |-----------------|----------|---------|
    /// | `AUTH_JWKS_URL` | **yes**  | --      |
    /// | `AUTH_ISSUER`   | no       | unset   |
    /// | `AUTH_AUDIENCE` | no       | unset   |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_JWKS_URL` is not set or is empty.
    pub fn from_env() -> Self {
        let jwks_url =
            std::env::var("AUTH_JWKS_URL").expect("AUTH_JWKS_URL must be set in the environment");
        assert!(!jwks_url.is_empty(), "AUTH_JWKS_URL must not be empty");

        Self {
            jwks_url,
            issuer: std::env::var("AUTH_ISSUER").ok(),
            audience: std::env::var("AUTH_AUDIENCE").ok(),
        }
    }
}

/// Validates RS256 bearer tokens against an external key-set endpoint.
pub struct JwksAuthenticator {
    config: AuthConfig,
    client: reqwest::Client,
    keys: RwLock<HashMap<String, DecodingKey>>,
}

impl JwksAuthenticator {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            keys: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the key set and rebuild the `kid` -> key cache.
    ///
    /// A fetch failure is an infrastructure fault, not a caller error.
    async fn refresh_keys(&self) -> Result<(), CoreError> {
        let jwk_set: JwkSet = self
            .client
            .get(&self.config.jwks_url)
            .send()
            .await
            .map_err(|e| CoreError::Internal(format!("JWKS fetch failed: {e}")))?
            .json()
            .await
            .map_err(|e| CoreError::Internal(format!("JWKS response malformed: {e}")))?;

        let mut keys = self.keys.write().await;
        keys.clear();
        for jwk in &jwk_set.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => {
                    tracing::warn!(kid = %kid, error = %e, "Skipping unusable JWK");
                }
            }
        }
        Ok(())
    }

    async fn key_for(&self, kid: &str) -> Option<DecodingKey> {
        self.keys.read().await.get(kid).cloned()
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        if let Some(ref issuer) = self.config.issuer {
            validation.set_issuer(&[issuer]);
        }
        if let Some(ref audience) = self.config.audience {
            validation.set_audience(&[audience]);
        }
        validation
    }
}

#[async_trait]
impl Authenticator for JwksAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<Claims, CoreError> {
        let header =
            decode_header(token).map_err(|_| CoreError::Unauthorized("Malformed token".into()))?;
        let kid = header
            .kid
            .ok_or_else(|| CoreError::Unauthorized("Token has no key id".into()))?;

        // Unknown kid: the issuer may have rotated keys, refresh once.
        let key = match self.key_for(&kid).await {
            Some(key) => key,
            None => {
                self.refresh_keys().await?;
                self.key_for(&kid)
                    .await
                    .ok_or_else(|| CoreError::Unauthorized(format!("No key matches kid {kid}")))?
            }
        };

        let token_data = decode::<Claims>(token, &key, &self.validation())
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwks_url: "http://localhost:1/jwks.json".to_string(),
            issuer: None,
            audience: None,
        }
    }

    /// RSA public key from RFC 7517 appendix A.1.
    const JWKS_FIXTURE: &str = r#"{"keys":[{
        "kty":"RSA",
        "n":"0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw",
        "e":"AQAB",
        "alg":"RS256",
        "kid":"2011-04-29"
    }]}"#;

    #[test]
    fn test_jwk_set_parses_and_yields_decoding_key() {
        let jwk_set: JwkSet = serde_json::from_str(JWKS_FIXTURE).expect("fixture should parse");

        let jwk = &jwk_set.keys[0];
        assert_eq!(jwk.common.key_id.as_deref(), Some("2011-04-29"));
        assert!(DecodingKey::from_jwk(jwk).is_ok());
    }

    #[tokio::test]
    async fn test_malformed_token_is_rejected_without_network() {
        let authenticator = JwksAuthenticator::new(test_config());

        let result = authenticator.authenticate("not-a-jwt").await;

        assert_matches!(result, Err(CoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_token_without_kid_is_rejected() {
        let authenticator = JwksAuthenticator::new(test_config());

        // HS256 token with no kid in the header; rejected before any key
        // lookup happens.
        let claims = serde_json::json!({"sub": "someone", "exp": 4102444800i64});
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"irrelevant"),
        )
        .expect("encoding should succeed");

        let result = authenticator.authenticate(&token).await;

        assert_matches!(result, Err(CoreError::Unauthorized(msg)) if msg.contains("key id"));
    }

    #[test]
    fn test_validation_carries_issuer_and_audience() {
        let authenticator = JwksAuthenticator::new(AuthConfig {
            jwks_url: "http://localhost:1/jwks.json".to_string(),
            issuer: Some("https://issuer.example".to_string()),
            audience: Some("https://api.example".to_string()),
        });

        let validation = authenticator.validation();

        assert!(validation.iss.is_some());
        assert!(validation.aud.is_some());
    }
}
