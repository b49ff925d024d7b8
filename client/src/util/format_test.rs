#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// Timestamps
// =============================================================

#[test]
fn date_part_takes_iso_prefix() {
    assert_eq!(date_part("2025-03-14T09:26:53.589Z"), Some("2025-03-14"));
    assert_eq!(date_part(" 2025-03-14 "), Some("2025-03-14"));
}

#[test]
fn date_part_rejects_other_shapes() {
    assert_eq!(date_part("14/03/2025"), None);
    assert_eq!(date_part("2025-3-4"), None);
    assert_eq!(date_part(""), None);
}

#[test]
fn month_key_is_year_and_month() {
    assert_eq!(month_key("2024-11-02T00:00:00Z"), Some("2024-11"));
    assert_eq!(month_key("nope"), None);
}

#[test]
fn local_day_key_without_browser_uses_prefix() {
    assert_eq!(local_day_key("2025-01-09T23:00:00Z").as_deref(), Some("2025-01-09"));
}

#[test]
fn today_key_is_empty_without_browser() {
    assert!(today_key().is_empty());
}

#[test]
fn format_date_handles_missing_values() {
    assert_eq!(format_date(None, Language::En), None);
    assert_eq!(format_date(Some("  "), Language::En), None);
    assert_eq!(format_date(Some("2025-02-01T10:00:00Z"), Language::Ar).as_deref(), Some("2025-02-01"));
}

#[test]
fn format_date_time_appends_clock() {
    assert_eq!(
        format_date_time(Some("2025-02-01T10:05:00Z"), Language::En).as_deref(),
        Some("2025-02-01 10:05")
    );
    assert_eq!(format_date_time(Some("2025-02-01"), Language::En).as_deref(), Some("2025-02-01"));
}

// =============================================================
// Text and numbers
// =============================================================

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate("Fix sink", 20), "Fix sink");
}

#[test]
fn truncate_cuts_on_characters() {
    assert_eq!(truncate("64f1a2b3c4d5e6f7", 8), "64f1a2b3...");
    assert_eq!(truncate("سباكة المطبخ", 5), "سباكة...");
}

#[test]
fn round_to_two_decimals() {
    assert!((round_to(4.256, 2) - 4.26).abs() < 1e-9);
    assert!((round_to(33.333, 1) - 33.3).abs() < 1e-9);
}

#[test]
fn money_and_rating_formatting() {
    assert_eq!(format_money(12.5), "12.50");
    assert_eq!(format_rating(Some(4.27)).as_deref(), Some("4.3"));
    assert_eq!(format_rating(None), None);
}
