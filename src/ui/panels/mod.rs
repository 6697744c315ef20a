pub(crate) mod budgets;
pub(crate) mod expenses;
pub(crate) mod insights;
pub(crate) mod summary;
