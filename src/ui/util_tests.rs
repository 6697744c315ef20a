#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;
use crate::models::MonthKey;

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_no_commas() {
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    // Month-over-month deltas can go negative
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── month_label ────────────────────────────────────────────

#[test]
fn test_month_label() {
    assert_eq!(month_label(MonthKey { year: 2024, month: 2 }), "February 2024");
    assert_eq!(month_label(MonthKey { year: 2023, month: 12 }), "December 2023");
    assert_eq!(month_label(MonthKey { year: 2024, month: 1 }), "January 2024");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate("", 5), "");
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_and_up() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (1, 0));
    scroll_down(&mut index, &mut scroll, 10, 3);
    scroll_down(&mut index, &mut scroll, 10, 3);
    // Cursor moved past the page, scroll follows
    assert_eq!((index, scroll), (3, 1));
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!(index, 2);
}

#[test]
fn test_scroll_jumps() {
    let (mut index, mut scroll) = (5, 3);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
}
