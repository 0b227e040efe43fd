//! Request and response payloads for the account API.
//!
//! The API speaks camelCase JSON; absent fields are significant (a 2xx
//! account payload is the authoritative snapshot of the profile, so a
//! missing field clears the local one).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Login request body for `POST /api/v1/auth`.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile form sent by signup (`POST /api/v1/account`) and save
/// (`PUT /api/v1/account`).
#[derive(Clone, Debug, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountForm {
    pub name: Option<String>,
    pub second_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub birth: Option<String>,
    pub city: Option<String>,
    pub sex: Option<String>,
    pub interests: Option<String>,
}

/// Account payload returned on 2xx by all four endpoints. Login always
/// carries a token; save may carry a refreshed one; signup and fetch
/// never do.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub email: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub second_name: Option<String>,
    pub birth: Option<String>,
    pub city: Option<String>,
    pub sex: Option<String>,
    pub interests: Option<String>,
    pub token: Option<String>,
}

/// Extract the server-supplied failure message from a non-2xx body.
///
/// Returns `Some` only when the body is JSON carrying a truthy `error`
/// field; the message falls back to the stringified `error` value when
/// `message` is absent.
#[must_use]
pub fn failure_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;
    let truthy = match error {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        _ => true,
    };
    if !truthy {
        return None;
    }
    match value.get("message") {
        Some(serde_json::Value::String(m)) => Some(m.clone()),
        _ => Some(error.to_string()),
    }
}
