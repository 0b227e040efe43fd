//! Gravatar URL derivation.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Build the gravatar URL for an email address.
///
/// The email is trimmed and lowercased before hashing. A missing email is
/// hashed as the literal string `"undefined"` so callers always get a
/// stable image URL.
#[must_use]
pub fn gravatar_url(email: Option<&str>) -> String {
    let normalized = match email {
        Some(e) => e.trim().to_lowercase(),
        None => "undefined".to_owned(),
    };
    let digest = md5::compute(normalized.as_bytes());
    format!("{GRAVATAR_BASE}/{digest:x}?d=mm&r=g&s=512")
}
