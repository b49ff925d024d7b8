use super::*;

#[test]
fn image_urls_are_detected_by_extension() {
    assert!(is_image_url("https://cdn.example.com/docs/id-front.JPG"));
    assert!(is_image_url("/uploads/license.png?v=2"));
    assert!(is_image_url("https://cdn.example.com/a.webp#page"));
}

#[test]
fn non_image_documents_are_not_inlined() {
    assert!(!is_image_url("https://cdn.example.com/docs/contract.pdf"));
    assert!(!is_image_url("https://cdn.example.com/docs/noext"));
    assert!(!is_image_url(""));
}

#[test]
fn step_stops_at_both_ends() {
    assert_eq!(step_clamped(0, -1, 3), 0);
    assert_eq!(step_clamped(2, 1, 3), 2);
    assert_eq!(step_clamped(1, 1, 3), 2);
    assert_eq!(step_clamped(1, -1, 3), 0);
}

#[test]
fn step_on_empty_list_is_zero() {
    assert_eq!(step_clamped(0, 1, 0), 0);
}

fn craftsman(id: &str) -> User {
    User { id: id.into(), ..User::default() }
}

#[test]
fn decision_removes_only_the_decided_craftsman() {
    let mut pending = vec![craftsman("c1"), craftsman("c2"), craftsman("c3")];
    assert!(settle_decision(&mut pending, "c2"));
    let ids: Vec<&str> = pending.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c3"]);
}

#[test]
fn decision_for_unknown_id_leaves_list_untouched() {
    let mut pending = vec![craftsman("c1"), craftsman("c2")];
    assert!(!settle_decision(&mut pending, "gone"));
    assert_eq!(pending.len(), 2);
}
