use rust_decimal::Decimal;

use super::Category;

/// Monthly spending limit per category. The loader guarantees the table
/// covers every category exactly once with a positive limit; iteration order
/// is the configured order and drives the budget-tracker panel.
#[derive(Debug, Clone)]
pub(crate) struct BudgetTable {
    entries: Vec<(Category, Decimal)>,
}

impl BudgetTable {
    pub(crate) fn new(entries: Vec<(Category, Decimal)>) -> Self {
        Self { entries }
    }

    pub(crate) fn entries(&self) -> &[(Category, Decimal)] {
        &self.entries
    }
}
