#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("housing"), Some(Category::Housing));
    assert_eq!(Category::parse("HOUSING"), Some(Category::Housing));
    assert_eq!(Category::parse("Food"), Some(Category::Food));
    assert_eq!(Category::parse("transportation"), Some(Category::Transportation));
    assert_eq!(Category::parse("Groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_roundtrip() {
    // Every category should roundtrip through as_str -> parse
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(Category::parse(s), Some(*c), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_all_is_complete() {
    let all = Category::all();
    assert_eq!(all.len(), 7);
    assert!(all.contains(&Category::Housing));
    assert!(all.contains(&Category::Other));
}

#[test]
fn test_category_display_names() {
    assert_eq!(Category::Food.display_name(), "Food & Dining");
    assert_eq!(Category::Transportation.display_name(), "Transport");
    assert_eq!(Category::Housing.display_name(), "Housing");
    assert_eq!(Category::Utilities.display_name(), "Utilities");
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Food), "Food");
}

// ── PaymentMethod ─────────────────────────────────────────────

#[test]
fn test_payment_method_parse() {
    assert_eq!(PaymentMethod::parse("card"), Some(PaymentMethod::Card));
    assert_eq!(PaymentMethod::parse("Cash"), Some(PaymentMethod::Cash));
    assert_eq!(
        PaymentMethod::parse("Bank Transfer"),
        Some(PaymentMethod::BankTransfer)
    );
    assert_eq!(
        PaymentMethod::parse("banktransfer"),
        Some(PaymentMethod::BankTransfer)
    );
    assert_eq!(PaymentMethod::parse("cheque"), None);
}

#[test]
fn test_payment_method_roundtrip() {
    for m in PaymentMethod::all() {
        assert_eq!(PaymentMethod::parse(m.as_str()), Some(*m));
    }
}

#[test]
fn test_payment_method_all() {
    assert_eq!(PaymentMethod::all().len(), 3);
    assert_eq!(format!("{}", PaymentMethod::BankTransfer), "Bank Transfer");
}

// ── MonthKey ──────────────────────────────────────────────────

fn key(year: i32, month: u32) -> MonthKey {
    MonthKey { year, month }
}

#[test]
fn test_month_key_previous() {
    assert_eq!(key(2024, 2).previous(), key(2024, 1));
}

#[test]
fn test_month_key_previous_rolls_year() {
    assert_eq!(key(2024, 1).previous(), key(2023, 12));
}

#[test]
fn test_month_key_display() {
    assert_eq!(key(2024, 2).to_string(), "2024-02");
    assert_eq!(key(2023, 12).to_string(), "2023-12");
}

#[test]
fn test_month_key_ordering_is_chronological() {
    let mut keys = vec![key(2024, 2), key(2023, 12), key(2024, 1)];
    keys.sort();
    let strings: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    assert_eq!(strings, vec!["2023-12", "2024-01", "2024-02"]);
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_month() {
    let txn = Transaction {
        id: 1,
        description: "Rent".into(),
        category: Category::Housing,
        amount: dec!(1200),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        payment_method: PaymentMethod::BankTransfer,
        note: None,
    };
    assert_eq!(txn.month(), key(2024, 2));
}

// ── BudgetTable ───────────────────────────────────────────────

#[test]
fn test_budget_table_preserves_order() {
    let table = BudgetTable::new(vec![
        (Category::Housing, dec!(1200)),
        (Category::Food, dec!(400)),
    ]);
    assert_eq!(
        table.entries(),
        &[(Category::Housing, dec!(1200)), (Category::Food, dec!(400))]
    );
}
