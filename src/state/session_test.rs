use super::*;

#[test]
fn session_default_has_no_identity() {
    let state = SessionState::default();
    assert!(state.username.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn accept_then_leave_round_trip() {
    let mut state = SessionState::default();
    state.accept("ada".to_owned());
    assert_eq!(state.username.as_deref(), Some("ada"));
    assert!(state.is_signed_in());
    state.leave();
    assert!(!state.is_signed_in());
}

#[test]
fn accept_replaces_previous_identity() {
    let mut state = SessionState::default();
    state.accept("ada".to_owned());
    state.accept("grace".to_owned());
    assert_eq!(state.username.as_deref(), Some("grace"));
}
