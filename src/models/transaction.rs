use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Category, MonthKey, PaymentMethod};

/// A single expense. The collection is loaded once at startup and never
/// mutated; amounts are validated non-negative by the loader.
#[derive(Debug, Clone)]
pub(crate) struct Transaction {
    pub(crate) id: u32,
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) amount: Decimal,
    pub(crate) date: NaiveDate,
    pub(crate) payment_method: PaymentMethod,
    pub(crate) note: Option<String>,
}

impl Transaction {
    pub(crate) fn month(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}
