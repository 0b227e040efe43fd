use super::*;

// =============================================================
// Display forms
// =============================================================

#[test]
fn server_error_displays_the_message_verbatim() {
    let err = SessionError::Server("bad credentials".to_owned());
    assert_eq!(err.to_string(), "bad credentials");
}

#[test]
fn transport_and_decode_errors_name_their_kind() {
    assert_eq!(
        SessionError::Transport("connection refused".to_owned()).to_string(),
        "transport error: connection refused"
    );
    assert_eq!(
        SessionError::Decode("malformed claims".to_owned()).to_string(),
        "decode error: malformed claims"
    );
}
