use super::*;

#[test]
fn refresh_trigger_starts_at_zero() {
    assert_eq!(RefreshTrigger::default().generation, 0);
}

#[test]
fn bump_advances_and_wraps() {
    let mut trigger = RefreshTrigger::default();
    trigger.bump();
    trigger.bump();
    assert_eq!(trigger.generation, 2);

    let mut last = RefreshTrigger { generation: u64::MAX };
    last.bump();
    assert_eq!(last.generation, 0);
}
