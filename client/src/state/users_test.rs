use super::*;
use crate::net::types::Role;

fn user(id: &str, role: Role, banned: bool) -> User {
    User { id: id.into(), role, is_banned: banned, ..User::default() }
}

fn state() -> UsersState {
    UsersState {
        items: vec![user("u1", Role::Client, false), user("u2", Role::Craftsman, true), user("u3", Role::Craftsman, false)],
        ..UsersState::default()
    }
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn get_by_id_finds_cached_user() {
    let s = state();
    assert_eq!(s.get_by_id("u2").map(|u| u.role.clone()), Some(Role::Craftsman));
    assert!(s.get_by_id("nope").is_none());
}

#[test]
fn craftsmen_filters_by_role() {
    let ids: Vec<_> = state().craftsmen().map(|u| u.id.clone()).collect();
    assert_eq!(ids, vec!["u2".to_owned(), "u3".to_owned()]);
}

// =============================================================
// set_banned
// =============================================================

#[test]
fn set_banned_updates_only_target() {
    let mut s = state();
    assert!(s.set_banned("u1", true));
    assert!(s.items[0].is_banned);
    assert!(s.items[1].is_banned);
    assert!(!s.items[2].is_banned);
}

#[test]
fn unban_clears_reason() {
    let mut s = state();
    s.items[1].is_banned_reason = Some("spam".into());
    assert!(s.set_banned("u2", false));
    assert!(!s.items[1].is_banned);
    assert!(s.items[1].is_banned_reason.is_none());
}

#[test]
fn set_banned_unknown_id_changes_nothing() {
    let mut s = state();
    let before = s.clone();
    assert!(!s.set_banned("ghost", true));
    assert_eq!(s, before);
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn load_success_replaces_items() {
    let mut s = UsersState::default();
    s.begin_load();
    assert!(s.loading);
    s.finish_load(Ok(vec![user("x", Role::Admin, false)]));
    assert!(!s.loading);
    assert!(s.loaded);
    assert_eq!(s.items.len(), 1);
}

#[test]
fn load_failure_keeps_previous_items() {
    let mut s = state();
    s.begin_load();
    s.finish_load(Err("boom".into()));
    assert_eq!(s.items.len(), 3);
    assert_eq!(s.error.as_deref(), Some("boom"));
}

#[test]
fn failed_load_is_reported_until_the_next_attempt() {
    let mut s = UsersState::default();
    assert!(!s.failed());
    s.begin_load();
    s.finish_load(Err("503".into()));
    assert!(s.failed());
    s.begin_load();
    assert!(!s.failed());
    s.finish_load(Ok(Vec::new()));
    assert!(!s.failed());
}
