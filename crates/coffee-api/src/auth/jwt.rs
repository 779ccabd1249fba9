//! Bearer-token signature and claim verification.
//!
//! Tokens are either RS256-signed by an Auth0 tenant (keys from its JWKS
//! document, selected by the header `kid`) or HS256-signed with a shared
//! secret. Every failure maps to an [`AuthError`] whose description is sent
//! to the client.

use fsnd_core::auth::AuthError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{AuthConfig, KeyConfig};

/// Claims read from a verified token.
///
/// `exp`, `aud` and `iss` are checked by `jsonwebtoken` before this struct
/// is handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Absent when the token was issued without RBAC permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    pub exp: i64,
}

/// Errors raised while building a [`TokenVerifier`].
#[derive(Debug, thiserror::Error)]
pub enum VerifierError {
    #[error("Failed to fetch JWKS from {url}: {source}")]
    Jwks {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

enum KeySource {
    Shared(DecodingKey),
    Jwks(JwkSet),
}

/// Verifies bearer tokens against the configured key source.
pub struct TokenVerifier {
    keys: KeySource,
    validation: Validation,
}

impl TokenVerifier {
    /// HS256 verification with a shared secret.
    pub fn from_secret(secret: &str, audience: Option<&str>) -> Self {
        Self {
            keys: KeySource::Shared(DecodingKey::from_secret(secret.as_bytes())),
            validation: validation(Algorithm::HS256, audience, None),
        }
    }

    /// RS256 verification against an already-loaded JWKS document.
    ///
    /// The issuer must be `https://{domain}/`.
    pub fn from_jwks(jwks: JwkSet, domain: &str, audience: Option<&str>) -> Self {
        let issuer = format!("https://{domain}/");
        Self {
            keys: KeySource::Jwks(jwks),
            validation: validation(Algorithm::RS256, audience, Some(&issuer)),
        }
    }

    /// Build a verifier from configuration, downloading the JWKS document
    /// when an Auth0 domain is configured.
    pub async fn from_config(config: &AuthConfig) -> Result<Self, VerifierError> {
        let audience = config.audience.as_deref();
        match &config.keys {
            KeyConfig::Secret(secret) => Ok(Self::from_secret(secret, audience)),
            KeyConfig::Auth0 { domain } => {
                let jwks = fetch_jwks(domain).await?;
                tracing::info!(domain = %domain, keys = jwks.keys.len(), "Loaded JWKS");
                Ok(Self::from_jwks(jwks, domain, audience))
            }
        }
    }

    /// Verify `token` and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let key = match &self.keys {
            KeySource::Shared(key) => key.clone(),
            KeySource::Jwks(set) => key_for(set, token)?,
        };

        decode::<Claims>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!(error = %err, "Token rejected");
                map_jwt_error(err.kind())
            })
    }
}

/// Select the JWKS key named by the token header's `kid`.
fn key_for(set: &JwkSet, token: &str) -> Result<DecodingKey, AuthError> {
    let header = decode_header(token).map_err(|_| unparseable())?;
    let kid = header
        .kid
        .ok_or_else(|| AuthError::invalid_header("Authorization malformed."))?;

    let jwk = set
        .find(&kid)
        .ok_or_else(|| AuthError::invalid_header("Unable to find the appropriate key."))?;

    DecodingKey::from_jwk(jwk).map_err(|err| {
        tracing::warn!(kid = %kid, error = %err, "Unusable JWK");
        unparseable()
    })
}

async fn fetch_jwks(domain: &str) -> Result<JwkSet, VerifierError> {
    let url = format!("https://{domain}/.well-known/jwks.json");
    let fetch = async {
        reqwest::get(&url)
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await
    };
    fetch.await.map_err(|source| VerifierError::Jwks { url, source })
}

fn validation(algorithm: Algorithm, audience: Option<&str>, issuer: Option<&str>) -> Validation {
    let mut validation = Validation::new(algorithm);
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }
    validation
}

fn unparseable() -> AuthError {
    AuthError::invalid_header("Unable to parse authentication token.")
}

fn map_jwt_error(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::token_expired(),
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::invalid_claims(
            "Incorrect claims. Please, check the audience and issuer.",
        ),
        _ => unparseable(),
    }
}
