use super::*;

#[test]
fn notice_state_defaults_empty() {
    let s = NoticeState::default();
    assert!(s.notices.is_empty());
    assert!(s.confirm.is_none());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut s = NoticeState::default();
    let a = s.push(NoticeKind::Success, "Done", "Service created.");
    let b = s.push(NoticeKind::Error, "Error", "Failed");
    assert!(b > a);
    assert_eq!(s.notices.len(), 2);
    assert_eq!(s.notices[1].kind, NoticeKind::Error);
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut s = NoticeState::default();
    let a = s.push(NoticeKind::Success, "A", "");
    let b = s.push(NoticeKind::Success, "B", "");
    s.dismiss(a);
    assert_eq!(s.notices.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    s.dismiss(999);
    assert_eq!(s.notices.len(), 1);
}
