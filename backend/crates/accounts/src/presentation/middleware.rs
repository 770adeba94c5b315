//! Access-Control Gate
//!
//! Middleware that requires a valid bearer token on protected routes.
//! On success the decoded claims are attached to the request extensions
//! for downstream handlers.

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use platform::token::TokenService;

use crate::error::AccountError;

/// Middleware state
#[derive(Clone)]
pub struct TokenGateState {
    pub tokens: TokenService,
}

/// Middleware that requires a valid session token.
///
/// A missing token and a rejected token are separate rejections ("no
/// token" / "invalid token"), both 403.
pub async fn require_token(
    state: TokenGateState,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(&req) {
        Some(token) => token,
        None => return Err(AccountError::MissingToken.into_response()),
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(_) => return Err(AccountError::InvalidToken.into_response()),
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with_auth(value: &str) -> Request<Body> {
        Request::builder()
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            extract_bearer_token(&request_with_auth("Bearer abc.def.ghi")),
            Some("abc.def.ghi".to_string())
        );
        assert_eq!(extract_bearer_token(&request_with_auth("Basic abc")), None);
        assert_eq!(extract_bearer_token(&request_with_auth("bearer abc")), None);

        let no_header = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(extract_bearer_token(&no_header), None);
    }
}
