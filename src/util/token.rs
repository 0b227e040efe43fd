//! Session-token claims decoding.
//!
//! The server issues JWT-style tokens; the client only reads the claims
//! segment, without signature verification, since the server re-validates
//! every request anyway. Decoding is pure and fallible.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::SessionError;

/// Claims carried by a session token.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since epoch.
    pub exp: u64,
    /// Server-assigned user id.
    pub id: String,
    /// Email the token was issued for.
    pub email: String,
}

impl TokenClaims {
    /// Expiry converted to milliseconds for wall-clock comparison.
    #[must_use]
    pub fn expires_at_ms(&self) -> u64 {
        self.exp * 1000
    }
}

/// Decode the claims segment of a token.
///
/// # Errors
///
/// Returns [`SessionError::Decode`] if the token is not dot-separated,
/// the claims segment is not base64url, or the claims JSON is malformed.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let claims = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SessionError::Decode("token has no claims segment".to_owned()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(claims)
        .map_err(|e| SessionError::Decode(format!("claims segment is not base64url: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::Decode(format!("malformed claims: {e}")))
}
