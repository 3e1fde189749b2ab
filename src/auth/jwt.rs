use axum::extract::FromRef;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

/// Bearer-token claims: who, when issued, when it stops being valid.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("bad signature")]
    BadSignature,
    #[error("malformed token")]
    Malformed,
}

/// Signing and verification keys derived once from process configuration.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            algorithm,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl: Duration::minutes(ttl_minutes),
        }
    }
}

impl JwtKeys {
    fn sign_with_ttl(&self, subject: &str, ttl: Duration) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: (now + ttl).unix_timestamp() as usize,
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(subject = %subject, "token signed");
        Ok(token)
    }

    /// Issue a token asserting `subject` for the configured TTL.
    pub fn sign(&self, subject: &str) -> anyhow::Result<String> {
        self.sign_with_ttl(subject, self.ttl)
    }

    /// Check signature integrity, then expiry, and return the claims.
    ///
    /// Expiry is exact: no leeway, a token is invalid the second after
    /// its `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            }
        })?;
        debug!(subject = %data.claims.sub, "token verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    #[tokio::test]
    async fn sign_and_verify_returns_subject() {
        let keys = make_keys();
        let token = keys.sign("admin@smartadmin.com").expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "admin@smartadmin.com");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_expired() {
        let keys = make_keys();
        let token = keys
            .sign_with_ttl("ghost@x.com", Duration::seconds(-5))
            .expect("sign");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[tokio::test]
    async fn wrong_key_is_rejected_as_bad_signature() {
        let keys = make_keys();
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            algorithm: Algorithm::HS256,
            ttl: Duration::minutes(30),
        };
        let token = other.sign("a@x.com").expect("sign");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::BadSignature);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_as_malformed() {
        let keys = make_keys();
        assert_eq!(
            keys.verify("not.a.token").unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(keys.verify("").unwrap_err(), TokenError::Malformed);
    }
}
