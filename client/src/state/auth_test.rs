use super::*;

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated);
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
}

#[test]
fn from_stored_requires_both_tokens() {
    assert_eq!(AuthState::from_stored(Some("A".into()), None), AuthState::default());
    assert_eq!(AuthState::from_stored(None, Some("R".into())), AuthState::default());

    let state = AuthState::from_stored(Some("A".into()), Some("R".into()));
    assert!(state.is_authenticated);
    assert_eq!(state.access_token.as_deref(), Some("A"));
    assert_eq!(state.refresh_token.as_deref(), Some("R"));
}

#[test]
fn from_stored_treats_empty_tokens_as_missing() {
    assert_eq!(AuthState::from_stored(Some(String::new()), Some("R".into())), AuthState::default());
    assert_eq!(AuthState::from_stored(Some("A".into()), Some(String::new())), AuthState::default());
}
