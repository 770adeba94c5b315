//! Signed Session Tokens
//!
//! Stateless JWT session tokens (HS256). The signing secret is process-wide
//! state: loaded once at startup and passed explicitly to [`TokenService`],
//! never read from the environment inside request handlers.
//!
//! Verification does not distinguish a tampered signature from an expired
//! token; both surface as [`TokenError::Rejected`].

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clock skew tolerance for expiry validation (seconds)
const VALIDATION_LEEWAY_SECS: u64 = 30;

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Account email
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token could not be minted
    #[error("Token issuance failed: {0}")]
    IssueFailed(String),

    /// Signature invalid or token expired
    #[error("Token rejected")]
    Rejected,
}

/// Issues and verifies signed session tokens.
///
/// Holds the HS256 keys derived from the shared signing secret. Cheap to
/// clone; read-only after construction, so it can be shared freely across
/// request tasks without locking.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the process signing secret.
    pub fn new(secret: &[u8; 32]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = VALIDATION_LEEWAY_SECS;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a token over the given identity claims, valid for `ttl`.
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Verify signature integrity and expiry; return the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_issue_verify_roundtrip() {
        let service = TokenService::new(&SECRET);
        let token = service
            .issue("user-42", "a@x.com", Duration::from_secs(3600))
            .unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.email, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = TokenService::new(&SECRET);
        let token = service
            .issue("user-42", "a@x.com", Duration::from_secs(3600))
            .unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(service.verify(&tampered).is_err());
        assert!(service.verify("not.a.token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = TokenService::new(&SECRET);
        let other = TokenService::new(&[8u8; 32]);

        let token = service
            .issue("user-42", "a@x.com", Duration::from_secs(3600))
            .unwrap();

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(&SECRET);

        // Encode claims whose expiry is well past the validation leeway
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-42".to_string(),
            email: "a@x.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding,
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(TokenError::Rejected)));
    }
}
