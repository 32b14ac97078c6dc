#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::category::FALLBACK_GLYPH;
use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: Decimal, kind: TransactionKind) -> Transaction {
    Transaction {
        id: "txn_test".into(),
        amount,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        description: "Test".into(),
        category: "Other".into(),
        kind,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(dec!(100.00), TransactionKind::Income);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(dec!(-50.00), TransactionKind::Expense);
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_kind_decides_not_sign() {
    // A positively-signed expense is still an expense
    let txn = make_txn(dec!(50.00), TransactionKind::Expense);
    assert!(txn.is_expense());
    assert_eq!(txn.abs_amount(), dec!(50.00));
}

#[test]
fn test_abs_amount() {
    assert_eq!(
        make_txn(dec!(-42.99), TransactionKind::Expense).abs_amount(),
        dec!(42.99)
    );
    assert_eq!(
        make_txn(dec!(42.99), TransactionKind::Income).abs_amount(),
        dec!(42.99)
    );
    assert_eq!(
        make_txn(Decimal::ZERO, TransactionKind::Income).abs_amount(),
        Decimal::ZERO
    );
}

#[test]
fn test_transaction_month() {
    let txn = make_txn(dec!(-1), TransactionKind::Expense);
    assert_eq!(txn.month(), "2024-01");
}

#[test]
fn test_draft_roundtrip_keeps_fields() {
    let txn = make_txn(dec!(-12.34), TransactionKind::Expense);
    let rebuilt = Transaction::from_draft(txn.id.clone(), txn.to_draft());
    assert_eq!(rebuilt, txn);
}

#[test]
fn test_transaction_json_shape() {
    let txn = make_txn(dec!(-50), TransactionKind::Expense);
    let value = serde_json::to_value(&txn).unwrap();
    assert_eq!(value["type"], "expense");
    assert_eq!(value["date"], "2024-01-15");
    assert_eq!(value["amount"].as_f64(), Some(-50.0));
    assert_eq!(value["category"], "Other");
}

// ── TransactionKind ───────────────────────────────────────────

#[test]
fn test_kind_parse() {
    assert_eq!(TransactionKind::parse("income"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("INCOME"), Some(TransactionKind::Income));
    assert_eq!(TransactionKind::parse("expense"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("e"), Some(TransactionKind::Expense));
    assert_eq!(TransactionKind::parse("refund"), None);
}

#[test]
fn test_kind_display() {
    assert_eq!(format!("{}", TransactionKind::Income), "income");
    assert_eq!(format!("{}", TransactionKind::Expense), "expense");
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_all() {
    let all = Category::all();
    assert_eq!(all.len(), 10);
    assert!(all.contains(&Category::FoodAndDining));
    assert!(all.contains(&Category::Other));
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(Category::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_parse_is_exact() {
    assert_eq!(Category::parse("food & dining"), None);
    assert_eq!(Category::parse("Groceries"), None);
}

#[test]
fn test_category_find_by_name_ignores_case() {
    assert_eq!(
        Category::find_by_name("food & dining"),
        Some(Category::FoodAndDining)
    );
    assert_eq!(Category::find_by_name(" TRAVEL "), Some(Category::Travel));
    assert_eq!(Category::find_by_name("Pets"), None);
}

#[test]
fn test_category_glyph_fallback() {
    assert_eq!(category_glyph("Housing"), "🏠");
    assert_eq!(category_glyph("Pets"), FALLBACK_GLYPH);
    assert_eq!(category_glyph(""), FALLBACK_GLYPH);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::FoodAndDining), "Food & Dining");
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_from_draft() {
    let draft = BudgetDraft {
        category: "Housing".into(),
        amount: dec!(500),
        month: "2024-01".into(),
    };
    let budget = Budget::from_draft("bud_1".into(), draft.clone());
    assert_eq!(budget.id, "bud_1");
    assert_eq!(budget.category, "Housing");
    assert_eq!(budget.month, "2024-01");
    assert_eq!(budget.amount, dec!(500));
    assert_eq!(budget.to_draft(), draft);
}

// ── Months ────────────────────────────────────────────────────

#[test]
fn test_parse_month() {
    assert!(parse_month("2025-07").is_some());
    assert!(parse_month("2025-13").is_none());
    assert!(parse_month("2025-7").is_none());
    assert!(parse_month("July").is_none());
}

#[test]
fn test_shift_month_across_years() {
    assert_eq!(shift_month("2024-12", 1), "2025-01");
    assert_eq!(shift_month("2025-01", -1), "2024-12");
    assert_eq!(shift_month("2025-03", 0), "2025-03");
    assert_eq!(shift_month("garbage", 1), "garbage");
}

#[test]
fn test_month_label() {
    assert_eq!(month_label("2025-07"), "Jul 2025");
    assert_eq!(month_label("bogus"), "bogus");
}

#[test]
fn test_current_month_shape() {
    let m = current_month();
    assert!(parse_month(&m).is_some());
    assert_eq!(month_key(today()), m);
}
