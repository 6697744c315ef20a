//! Built-in dataset. Records are kept in text form and parsed at startup so
//! every data-model invariant (known category and payment method, non-negative
//! amount, well-formed date, total budget coverage) is checked before the
//! first frame is drawn.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{BudgetTable, Category, PaymentMethod, Transaction};

pub(crate) struct Dataset {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) budgets: BudgetTable,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// (id, description, category, amount, date, payment method, note)
type RawRecord = (u32, &'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

const SAMPLE_EXPENSES: &[RawRecord] = &[
    (1, "Rent", "Housing", "1200", "2024-02-01", "Bank Transfer", ""),
    (2, "Groceries", "Food", "185.32", "2024-02-08", "Card", "Weekly supermarket run"),
    (3, "Gym Membership", "Health", "49.99", "2024-02-03", "Card", ""),
    (4, "Streaming Services", "Entertainment", "29.97", "2024-02-12", "Card", ""),
    (5, "Electricity Bill", "Utilities", "88.50", "2024-02-09", "Bank Transfer", ""),
    (6, "Dinner with friends", "Food", "72.44", "2024-01-26", "Card", ""),
    (7, "Gas", "Transportation", "45.21", "2024-02-14", "Card", ""),
    (8, "Metro pass", "Transportation", "89", "2024-01-02", "Card", ""),
    (9, "Doctor visit", "Health", "160", "2024-01-18", "Card", ""),
    (10, "Coffee beans", "Food", "22.50", "2024-02-06", "Cash", ""),
    (11, "Water bill", "Utilities", "34.75", "2024-01-22", "Bank Transfer", ""),
    (12, "Movie night", "Entertainment", "38.25", "2024-02-10", "Card", ""),
];

const MONTHLY_BUDGETS: &[(&str, &str)] = &[
    ("Housing", "1200"),
    ("Food", "400"),
    ("Transportation", "200"),
    ("Health", "150"),
    ("Entertainment", "120"),
    ("Utilities", "150"),
    ("Other", "100"),
];

pub(crate) fn load() -> Result<Dataset> {
    let transactions = SAMPLE_EXPENSES
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;
    check_unique_ids(&transactions)?;
    let budgets = parse_budgets(MONTHLY_BUDGETS)?;
    Ok(Dataset {
        transactions,
        budgets,
    })
}

fn parse_record(record: &RawRecord) -> Result<Transaction> {
    let &(id, description, category, amount, date, payment_method, note) = record;

    let category = Category::parse(category)
        .with_context(|| format!("transaction {id}: unknown category '{category}'"))?;
    let payment_method = PaymentMethod::parse(payment_method)
        .with_context(|| format!("transaction {id}: unknown payment method '{payment_method}'"))?;
    let amount = Decimal::from_str(amount)
        .with_context(|| format!("transaction {id}: bad amount '{amount}'"))?;
    if amount < Decimal::ZERO {
        bail!("transaction {id}: negative amount {amount}");
    }
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .with_context(|| format!("transaction {id}: bad date '{date}'"))?;

    Ok(Transaction {
        id,
        description: description.into(),
        category,
        amount,
        date,
        payment_method,
        note: (!note.is_empty()).then(|| note.into()),
    })
}

fn check_unique_ids(transactions: &[Transaction]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for txn in transactions {
        if !seen.insert(txn.id) {
            bail!("duplicate transaction id {}", txn.id);
        }
    }
    Ok(())
}

/// Every category must appear exactly once with a positive limit.
fn parse_budgets(raw: &[(&str, &str)]) -> Result<BudgetTable> {
    let mut entries: Vec<(Category, Decimal)> = Vec::with_capacity(raw.len());
    for &(name, limit) in raw {
        let category =
            Category::parse(name).with_context(|| format!("budget: unknown category '{name}'"))?;
        if entries.iter().any(|(c, _)| *c == category) {
            bail!("budget: duplicate entry for {category}");
        }
        let limit = Decimal::from_str(limit)
            .with_context(|| format!("budget for {category}: bad amount '{limit}'"))?;
        if limit <= Decimal::ZERO {
            bail!("budget for {category}: limit must be positive, got {limit}");
        }
        entries.push((category, limit));
    }
    for category in Category::all() {
        if !entries.iter().any(|(c, _)| c == category) {
            bail!("budget: no entry for {category}");
        }
    }
    Ok(BudgetTable::new(entries))
}

#[cfg(test)]
mod tests;
