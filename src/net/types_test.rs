use super::*;

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_prefers_server_message() {
    let body = r#"{"error": true, "message": "bad credentials"}"#;
    assert_eq!(failure_message(body).as_deref(), Some("bad credentials"));
}

#[test]
fn failure_message_requires_truthy_error() {
    assert!(failure_message(r#"{"error": false, "message": "m"}"#).is_none());
    assert!(failure_message(r#"{"error": null, "message": "m"}"#).is_none());
    assert!(failure_message(r#"{"message": "m"}"#).is_none());
}

#[test]
fn failure_message_falls_back_to_the_error_value() {
    assert_eq!(
        failure_message(r#"{"error": "boom"}"#).as_deref(),
        Some("\"boom\"")
    );
}

#[test]
fn failure_message_ignores_non_json_bodies() {
    assert!(failure_message("Internal Server Error").is_none());
    assert!(failure_message("").is_none());
}

// =============================================================
// AccountPayload deserialization
// =============================================================

#[test]
fn account_payload_reads_camel_case_fields() {
    let payload: AccountPayload = serde_json::from_str(
        r#"{
            "email": "a@b.com",
            "id": "1",
            "name": "Ada",
            "secondName": "Lovelace",
            "birth": "1815-12-10",
            "city": "London",
            "sex": "female",
            "interests": "mathematics",
            "token": "T"
        }"#,
    )
    .expect("payload");

    assert_eq!(payload.email.as_deref(), Some("a@b.com"));
    assert_eq!(payload.second_name.as_deref(), Some("Lovelace"));
    assert_eq!(payload.token.as_deref(), Some("T"));
}

#[test]
fn account_payload_tolerates_missing_and_extra_fields() {
    let payload: AccountPayload =
        serde_json::from_str(r#"{"email": "a@b.com", "score": 42}"#).expect("payload");
    assert_eq!(payload.email.as_deref(), Some("a@b.com"));
    assert!(payload.id.is_none());
    assert!(payload.token.is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn credentials_serialize_to_email_and_password() {
    let value = serde_json::to_value(Credentials {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
    })
    .expect("json");
    assert_eq!(value, serde_json::json!({"email": "a@b.com", "password": "pw"}));
}

#[test]
fn account_form_serializes_camel_case() {
    let form = AccountForm {
        name: Some("Ada".to_owned()),
        second_name: Some("Lovelace".to_owned()),
        ..AccountForm::default()
    };
    let value = serde_json::to_value(&form).expect("json");
    assert_eq!(value.get("secondName"), Some(&serde_json::json!("Lovelace")));
    // Absent fields still appear, as explicit nulls.
    assert_eq!(value.get("city"), Some(&serde_json::Value::Null));
}
