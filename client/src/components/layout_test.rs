use super::*;

#[test]
fn section_root_is_active() {
    assert!(is_active("/users", "/users"));
    assert!(is_active("/users/abc", "/users"));
}

#[test]
fn sibling_prefix_is_not_active() {
    assert!(!is_active("/usersettings", "/users"));
    assert!(!is_active("/dashboard", "/users"));
}
