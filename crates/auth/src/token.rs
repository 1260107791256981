//! Authorization header parsing

use axum::http::HeaderValue;

use crate::error::AuthError;

/// Extract the bearer token from an `Authorization` header.
///
/// The scheme is matched case-insensitively and surrounding whitespace
/// around the token is ignored. An empty token is rejected.
pub fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    let (scheme, token) = header_str
        .split_once(' ')
        .ok_or(AuthError::InvalidAuthorizationFormat)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    Ok(token.to_string())
}
