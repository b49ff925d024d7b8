use super::*;

fn admin_json() -> String {
    r#"{"_id":"a1","fullName":"Root","email":"root@example.com","role":"admin"}"#.to_owned()
}

// =============================================================
// session_from_parts
// =============================================================

#[test]
fn admin_session_is_restored() {
    let session = session_from_parts(Some("tok".into()), Some(admin_json())).unwrap();
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.id, "a1");
}

#[test]
fn non_admin_session_is_discarded() {
    let client = r#"{"_id":"c1","role":"client"}"#.to_owned();
    assert!(session_from_parts(Some("tok".into()), Some(client)).is_none());
}

#[test]
fn incomplete_or_corrupt_session_is_discarded() {
    assert!(session_from_parts(None, Some(admin_json())).is_none());
    assert!(session_from_parts(Some("  ".into()), Some(admin_json())).is_none());
    assert!(session_from_parts(Some("tok".into()), None).is_none());
    assert!(session_from_parts(Some("tok".into()), Some("{not json".into())).is_none());
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn auth_state_default_has_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_admin());
    assert!(AuthState::pending().loading);
}

#[test]
fn restore_outside_browser_is_signed_out_and_loaded() {
    let state = AuthState::restore();
    assert!(state.session.is_none());
    assert!(!state.loading);
}

#[test]
fn sign_in_then_out() {
    let user: User = serde_json::from_str(&admin_json()).unwrap();
    let mut state = AuthState::pending();
    state.sign_in(LoginPayload { token: "tok".into(), user });
    assert!(state.is_admin());
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.full_name.as_str()), Some("Root"));

    state.sign_out();
    assert!(state.session.is_none());
}

#[test]
fn replace_user_updates_session_user_only_when_signed_in() {
    let user: User = serde_json::from_str(&admin_json()).unwrap();
    let mut state = AuthState::default();
    state.replace_user(user.clone());
    assert!(state.session.is_none());

    state.sign_in(LoginPayload { token: "tok".into(), user: user.clone() });
    state.replace_user(User { full_name: "Root Renamed".into(), ..user });
    assert_eq!(state.user().map(|u| u.full_name.as_str()), Some("Root Renamed"));
    assert_eq!(state.session.as_ref().map(|s| s.token.as_str()), Some("tok"));
}
