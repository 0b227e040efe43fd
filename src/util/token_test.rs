use super::*;
use crate::error::SessionError;

/// Fabricate an unsigned JWT-style token with the given claims.
fn make_token(exp: u64, id: &str, email: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        serde_json::json!({ "exp": exp, "id": id, "email": email }).to_string(),
    );
    format!("{header}.{claims}.sig")
}

// =============================================================
// decode_claims
// =============================================================

#[test]
fn decodes_claims_from_fabricated_token() {
    let token = make_token(1_700_000_000, "u-1", "a@b.com");
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.exp, 1_700_000_000);
    assert_eq!(claims.id, "u-1");
    assert_eq!(claims.email, "a@b.com");
}

#[test]
fn expiry_converts_seconds_to_millis() {
    let token = make_token(1_700_000_000, "u-1", "a@b.com");
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.expires_at_ms(), 1_700_000_000_000);
}

#[test]
fn rejects_token_without_claims_segment() {
    let err = decode_claims("no-dots-here").expect_err("should fail");
    assert!(matches!(err, SessionError::Decode(_)));
}

#[test]
fn rejects_claims_that_are_not_base64url() {
    let err = decode_claims("header.!!!not-base64!!!.sig").expect_err("should fail");
    assert!(matches!(err, SessionError::Decode(_)));
}

#[test]
fn rejects_claims_that_are_not_json() {
    let claims = URL_SAFE_NO_PAD.encode(b"plain text");
    let err = decode_claims(&format!("h.{claims}.s")).expect_err("should fail");
    assert!(matches!(err, SessionError::Decode(_)));
}

#[test]
fn rejects_claims_missing_required_fields() {
    let claims = URL_SAFE_NO_PAD.encode(br#"{"exp": 1}"#);
    let err = decode_claims(&format!("h.{claims}.s")).expect_err("should fail");
    assert!(matches!(err, SessionError::Decode(_)));
}
