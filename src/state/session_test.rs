use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_identity() {
    let state = SessionState::default();
    assert!(state.name.is_none());
    assert!(state.second_name.is_none());
    assert!(state.email.is_none());
    assert!(state.birth.is_none());
    assert!(state.city.is_none());
    assert!(state.sex.is_none());
    assert!(state.interests.is_none());
    assert!(state.id.is_none());
    assert!(state.token.is_none());
}

#[test]
fn session_state_default_seeds_sex_options() {
    let state = SessionState::default();
    assert_eq!(state.items, vec!["male", "female", "non binary"]);
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn no_token_is_not_authenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = SessionState { token: Some(String::new()), ..SessionState::default() };
    assert!(!state.is_authenticated());
}

#[test]
fn non_empty_token_is_authenticated() {
    let state = SessionState { token: Some("T".to_owned()), ..SessionState::default() };
    assert!(state.is_authenticated());
}

// =============================================================
// avatar_url
// =============================================================

#[test]
fn avatar_url_missing_email_matches_literal_undefined() {
    let anonymous = SessionState::default();
    let literal = SessionState {
        email: Some("undefined".to_owned()),
        ..SessionState::default()
    };
    assert_eq!(anonymous.avatar_url(), literal.avatar_url());
}
