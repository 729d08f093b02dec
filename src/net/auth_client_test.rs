use super::*;

// =============================================================
// refresh scheduling
// =============================================================

#[test]
fn refresh_is_due_inside_the_threshold_window() {
    assert!(refresh_due(1_000, 700));
    assert!(refresh_due(1_000, 999));
}

#[test]
fn refresh_is_not_due_before_the_window() {
    assert!(!refresh_due(1_000, 699));
    assert!(!refresh_due(1_000, 0));
}

#[test]
fn refresh_is_due_after_expiry() {
    assert!(refresh_due(1_000, 1_000));
    assert!(refresh_due(1_000, 5_000));
}
