#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_load_builtin_dataset() {
    let dataset = load().unwrap();
    assert_eq!(dataset.transactions.len(), 12);
    assert_eq!(dataset.budgets.entries().len(), Category::all().len());
}

#[test]
fn test_load_parses_notes() {
    let dataset = load().unwrap();
    let groceries = dataset
        .transactions
        .iter()
        .find(|t| t.description == "Groceries")
        .unwrap();
    assert_eq!(groceries.note.as_deref(), Some("Weekly supermarket run"));

    let rent = dataset
        .transactions
        .iter()
        .find(|t| t.description == "Rent")
        .unwrap();
    assert!(rent.note.is_none());
    assert_eq!(rent.amount, dec!(1200));
}

#[test]
fn test_parse_record_rejects_unknown_category() {
    let record = (1, "Rent", "Mortgage", "1200", "2024-02-01", "Card", "");
    let err = parse_record(&record).unwrap_err();
    assert!(err.to_string().contains("unknown category"));
}

#[test]
fn test_parse_record_rejects_unknown_payment_method() {
    let record = (1, "Rent", "Housing", "1200", "2024-02-01", "Cheque", "");
    let err = parse_record(&record).unwrap_err();
    assert!(err.to_string().contains("unknown payment method"));
}

#[test]
fn test_parse_record_rejects_negative_amount() {
    let record = (1, "Refund", "Other", "-5.00", "2024-02-01", "Card", "");
    let err = parse_record(&record).unwrap_err();
    assert!(err.to_string().contains("negative amount"));
}

#[test]
fn test_parse_record_rejects_bad_amount() {
    let record = (1, "Rent", "Housing", "twelve", "2024-02-01", "Card", "");
    assert!(parse_record(&record).is_err());
}

#[test]
fn test_parse_record_rejects_bad_date() {
    let record = (1, "Rent", "Housing", "1200", "2024-02-30", "Card", "");
    assert!(parse_record(&record).is_err());
    let record = (1, "Rent", "Housing", "1200", "02/01/2024", "Card", "");
    assert!(parse_record(&record).is_err());
}

#[test]
fn test_duplicate_ids_rejected() {
    let a = parse_record(&(1, "Rent", "Housing", "1200", "2024-02-01", "Card", "")).unwrap();
    let b = parse_record(&(1, "Gas", "Transportation", "45", "2024-02-02", "Card", "")).unwrap();
    assert!(check_unique_ids(&[a, b]).is_err());
}

#[test]
fn test_budget_table_must_cover_every_category() {
    let err = parse_budgets(&[("Housing", "1200")]).unwrap_err();
    assert!(err.to_string().contains("no entry for"));
}

#[test]
fn test_budget_table_rejects_duplicates() {
    let mut raw: Vec<(&str, &str)> = MONTHLY_BUDGETS.to_vec();
    raw.push(("Food", "999"));
    let err = parse_budgets(&raw).unwrap_err();
    assert!(err.to_string().contains("duplicate entry"));
}

#[test]
fn test_budget_table_rejects_non_positive_limits() {
    let raw = [
        ("Housing", "0"),
        ("Food", "400"),
        ("Transportation", "200"),
        ("Health", "150"),
        ("Entertainment", "120"),
        ("Utilities", "150"),
        ("Other", "100"),
    ];
    let err = parse_budgets(&raw).unwrap_err();
    assert!(err.to_string().contains("must be positive"));
}

#[test]
fn test_builtin_budget_figures() {
    let budgets = parse_budgets(MONTHLY_BUDGETS).unwrap();
    let entries = budgets.entries();
    // Table order drives panel order
    assert_eq!(entries[0], (Category::Housing, dec!(1200)));
    assert_eq!(entries[1], (Category::Food, dec!(400)));
    assert_eq!(entries[6], (Category::Other, dec!(100)));
}
