use super::*;
use crate::net::types::{Role, User};
use crate::state::auth::Session;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        session: Some(Session {
            token: "t".to_owned(),
            user: User { id: "u1".to_owned(), role, ..User::default() },
        }),
        loading: false,
    }
}

#[test]
fn redirect_when_loaded_without_session() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_to_login(&state));
    assert_eq!(root_target(&state), "/login");
}

#[test]
fn no_redirect_while_loading() {
    assert!(!should_redirect_to_login(&AuthState::pending()));
    assert!(!should_leave_login(&AuthState::pending()));
}

#[test]
fn admin_session_stays_and_leaves_login() {
    let state = signed_in(Role::Admin);
    assert!(!should_redirect_to_login(&state));
    assert!(should_leave_login(&state));
    assert_eq!(root_target(&state), "/dashboard");
}

#[test]
fn non_admin_session_is_sent_to_login() {
    let state = signed_in(Role::Moderator);
    assert!(should_redirect_to_login(&state));
    assert!(!should_leave_login(&state));
}
