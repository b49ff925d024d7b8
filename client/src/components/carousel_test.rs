use super::*;

#[test]
fn next_wraps_to_first() {
    assert_eq!(wrap_next(0, 3), 1);
    assert_eq!(wrap_next(2, 3), 0);
}

#[test]
fn prev_wraps_to_last() {
    assert_eq!(wrap_prev(1, 3), 0);
    assert_eq!(wrap_prev(0, 3), 2);
}

#[test]
fn empty_ring_stays_at_zero() {
    assert_eq!(wrap_next(0, 0), 0);
    assert_eq!(wrap_prev(0, 0), 0);
}
