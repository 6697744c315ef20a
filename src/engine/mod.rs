//! Pure aggregations over the expense list. Every function here is a plain
//! scan or reduction with no state of its own; the app recomputes all of them
//! from scratch whenever the month/category selection changes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{BudgetTable, Category, MonthKey, PaymentMethod, Transaction};

/// Utilization display caps at 999% so a blown budget can't stretch the panel.
const UTILIZATION_CAP: u32 = 999;

/// The headline "average per day" divides by a flat 30 regardless of the
/// selected month's actual length.
const DAYS_PER_MONTH: u32 = 30;

/// Distinct months with at least one transaction, most recent first.
pub(crate) fn months_present(transactions: &[Transaction]) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = Vec::new();
    for txn in transactions {
        let month = txn.month();
        if !months.contains(&month) {
            months.push(month);
        }
    }
    months.sort_unstable_by(|a, b| b.cmp(a));
    months
}

/// Transactions in `month`, optionally narrowed to one category
/// (`None` = all categories). Source order is preserved.
pub(crate) fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    month: MonthKey,
    category: Option<Category>,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| t.month() == month && category.map_or(true, |c| t.category == c))
        .collect()
}

pub(crate) fn sum_amounts<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Decimal {
    transactions.into_iter().map(|t| t.amount).sum()
}

/// Total spend across all categories for one month.
pub(crate) fn monthly_total(transactions: &[Transaction], month: MonthKey) -> Decimal {
    sum_amounts(filter_transactions(transactions, month, None))
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MonthComparison {
    pub(crate) current: Decimal,
    pub(crate) previous: Decimal,
    pub(crate) delta: Decimal,
    /// `None` when there was no spend last month: "no comparison available"
    /// is a rendered state, not a division error.
    pub(crate) percent: Option<Decimal>,
}

pub(crate) fn month_over_month(transactions: &[Transaction], month: MonthKey) -> MonthComparison {
    let current = monthly_total(transactions, month);
    let previous = monthly_total(transactions, month.previous());
    let delta = current - previous;
    let percent = (!previous.is_zero()).then(|| delta / previous * Decimal::ONE_HUNDRED);
    MonthComparison {
        current,
        previous,
        delta,
        percent,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BudgetLine {
    pub(crate) category: Category,
    pub(crate) actual: Decimal,
    pub(crate) limit: Decimal,
    pub(crate) utilization: u32,
}

/// One line per budget-table entry, in table order, including categories with
/// zero spend this month.
pub(crate) fn category_breakdown(
    transactions: &[Transaction],
    budgets: &BudgetTable,
    month: MonthKey,
) -> Vec<BudgetLine> {
    budgets
        .entries()
        .iter()
        .map(|&(category, limit)| {
            let actual = sum_amounts(filter_transactions(transactions, month, Some(category)));
            BudgetLine {
                category,
                actual,
                limit,
                utilization: utilization_percent(actual, limit),
            }
        })
        .collect()
}

fn utilization_percent(actual: Decimal, limit: Decimal) -> u32 {
    // Limits are validated positive at load; the guard keeps this total.
    if limit <= Decimal::ZERO {
        return UTILIZATION_CAP;
    }
    // Midpoints round up: 50.5% reads as 51, not the banker's 50
    let percent = (actual / limit * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    percent.to_u32().unwrap_or(UTILIZATION_CAP).min(UTILIZATION_CAP)
}

/// Spend per payment method. All three methods are always present, zero-filled
/// when absent from the input, in enum order.
pub(crate) fn payment_method_split<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(PaymentMethod, Decimal)> {
    let mut split: Vec<(PaymentMethod, Decimal)> = PaymentMethod::all()
        .iter()
        .map(|&method| (method, Decimal::ZERO))
        .collect();
    for txn in transactions {
        if let Some(entry) = split.iter_mut().find(|(m, _)| *m == txn.payment_method) {
            entry.1 += txn.amount;
        }
    }
    split
}

pub(crate) fn average_per_day(monthly_total: Decimal) -> Decimal {
    monthly_total / Decimal::from(DAYS_PER_MONTH)
}

/// The single largest expense in the given view, if any.
pub(crate) fn highest_expense<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Option<&'a Transaction> {
    transactions.into_iter().max_by_key(|t| t.amount)
}

/// Category with the most transactions in the given view. Ties go to the
/// earlier category in enum order.
pub(crate) fn most_active_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Option<Category> {
    let mut counts = [0usize; 7];
    for txn in transactions {
        if let Some(pos) = Category::all().iter().position(|c| *c == txn.category) {
            counts[pos] += 1;
        }
    }
    let (pos, &count) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(pos, &count)| (count, std::cmp::Reverse(pos)))?;
    (count > 0).then(|| Category::all()[pos])
}
