mod budget;
mod category;
mod month;
mod payment;
mod transaction;

pub(crate) use budget::BudgetTable;
pub(crate) use category::Category;
pub(crate) use month::MonthKey;
pub(crate) use payment::PaymentMethod;
pub(crate) use transaction::Transaction;

#[cfg(test)]
mod tests;
