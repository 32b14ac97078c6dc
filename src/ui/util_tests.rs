#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;
use crate::models::{Transaction, TransactionKind};

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 5), "hell…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    // Japanese characters are multi-byte UTF-8
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_emoji() {
    assert_eq!(truncate("🎉🎊🎈🎁", 3), "🎉🎊…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_mixed_unicode() {
    assert_eq!(truncate("café résumé", 5), "café…");
}

#[test]
fn test_truncate_two_chars() {
    assert_eq!(truncate("hello", 2), "h…");
}

#[test]
fn test_truncate_single_char_string() {
    assert_eq!(truncate("a", 1), "a");
    assert_eq!(truncate("a", 5), "a");
}

#[test]
fn test_truncate_max_one_with_long_string() {
    // max=1 should always produce "…" for strings longer than 1
    assert_eq!(truncate("ab", 1), "…");
    assert_eq!(truncate("abc", 1), "…");
}

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
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000.00)), "$10,000,000.00");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

#[test]
fn test_format_amount_negative_large() {
    assert_eq!(format_amount(dec!(-99999.01)), "-$99,999.01");
}

#[test]
fn test_format_amount_single_digit() {
    assert_eq!(format_amount(dec!(5)), "$5.00");
}

// ── format_signed ──────────────────────────────────────────

fn txn(amount: Decimal, kind: TransactionKind) -> Transaction {
    Transaction {
        id: "txn_1".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        description: "Test".into(),
        category: "Other".into(),
        kind,
    }
}

#[test]
fn test_format_signed_expense() {
    let t = txn(dec!(-1250.5), TransactionKind::Expense);
    assert_eq!(format_signed(&t), "-$1,250.50");
}

#[test]
fn test_format_signed_income() {
    let t = txn(dec!(3000), TransactionKind::Income);
    assert_eq!(format_signed(&t), "+$3,000.00");
}

#[test]
fn test_format_signed_uses_kind_not_stored_sign() {
    // A positive-stored expense still renders as an outflow
    let t = txn(dec!(20), TransactionKind::Expense);
    assert_eq!(format_signed(&t), "-$20.00");
}

// ── format_percent ─────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(Some(dec!(42.5))), "42.5%");
    assert_eq!(format_percent(Some(dec!(0))), "0.0%");
    assert_eq!(format_percent(Some(dec!(133.33))), "133.3%");
}

#[test]
fn test_format_percent_unbounded() {
    assert_eq!(format_percent(None), "∞");
}

// ── progress_bar ───────────────────────────────────────────

#[test]
fn test_progress_bar_half() {
    assert_eq!(progress_bar(dec!(50), 10), "[█████░░░░░]");
}

#[test]
fn test_progress_bar_clamps() {
    assert_eq!(progress_bar(dec!(250), 4), "[████]");
    assert_eq!(progress_bar(dec!(-10), 4), "[░░░░]");
}

#[test]
fn test_progress_bar_zero_width() {
    assert_eq!(progress_bar(dec!(50), 0), "[]");
}

// ── Cursor ─────────────────────────────────────────────────

fn cursor(index: usize, offset: usize) -> Cursor {
    Cursor { index, offset }
}

#[test]
fn test_cursor_down_moves_window() {
    let mut c = cursor(2, 0);
    c.down(10, 3);
    assert_eq!(c, cursor(3, 1));
}

#[test]
fn test_cursor_down_stops_at_end() {
    let mut c = cursor(4, 2);
    c.down(5, 3);
    assert_eq!(c, cursor(4, 2));
}

#[test]
fn test_cursor_up_pulls_window() {
    let mut c = cursor(3, 3);
    c.up();
    assert_eq!(c, cursor(2, 2));
    c.top();
    c.up();
    assert_eq!(c, cursor(0, 0));
}

#[test]
fn test_cursor_bottom_and_top() {
    let mut c = Cursor::default();
    c.bottom(10, 4);
    assert_eq!(c, cursor(9, 6));
    c.top();
    assert_eq!(c, cursor(0, 0));
}

#[test]
fn test_cursor_bottom_empty() {
    let mut c = Cursor::default();
    c.bottom(0, 4);
    assert_eq!(c, cursor(0, 0));
}

#[test]
fn test_cursor_clamp_after_shrink() {
    let mut c = cursor(9, 6);
    c.clamp(3);
    assert_eq!(c, cursor(2, 2));
    c.clamp(0);
    assert_eq!(c, cursor(0, 0));
}
