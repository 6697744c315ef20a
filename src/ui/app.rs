use rust_decimal::Decimal;

use crate::data::Dataset;
use crate::engine::{self, BudgetLine, MonthComparison};
use crate::models::{BudgetTable, Category, MonthKey, PaymentMethod, Transaction};

/// All session state. The transaction list and budget table are immutable
/// after load; the selection (month + category) is the only thing the user
/// mutates, and every derived field below is recomputed from scratch by
/// `refresh()` on each change.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) show_help: bool,

    pub(crate) transactions: Vec<Transaction>,
    pub(crate) budgets: BudgetTable,

    // Selection
    pub(crate) months: Vec<MonthKey>,
    pub(crate) month_index: usize,
    pub(crate) selected_category: Option<Category>,

    // Derived views
    pub(crate) filtered: Vec<Transaction>,
    pub(crate) filtered_total: Decimal,
    pub(crate) comparison: MonthComparison,
    pub(crate) daily_average: Decimal,
    pub(crate) breakdown: Vec<BudgetLine>,
    pub(crate) payment_split: Vec<(PaymentMethod, Decimal)>,
    pub(crate) highest: Option<Transaction>,
    pub(crate) most_active: Option<Category>,

    // Expense table cursor
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(dataset: Dataset) -> Self {
        let months = engine::months_present(&dataset.transactions);
        let mut app = Self {
            running: true,
            show_help: false,
            transactions: dataset.transactions,
            budgets: dataset.budgets,
            months,
            month_index: 0,
            selected_category: None,
            filtered: Vec::new(),
            filtered_total: Decimal::ZERO,
            comparison: MonthComparison::default(),
            daily_average: Decimal::ZERO,
            breakdown: Vec::new(),
            payment_split: engine::payment_method_split(&[]),
            highest: None,
            most_active: None,
            expense_index: 0,
            expense_scroll: 0,
            visible_rows: 20,
        };
        app.refresh();
        app
    }

    /// Currently selected month, `None` only when the dataset is empty.
    pub(crate) fn selected_month(&self) -> Option<MonthKey> {
        self.months.get(self.month_index).copied()
    }

    pub(crate) fn category_label(&self) -> &'static str {
        match self.selected_category {
            None => "All categories",
            Some(c) => c.display_name(),
        }
    }

    /// Recompute every derived view from the immutable dataset and the
    /// current selection.
    pub(crate) fn refresh(&mut self) {
        let Some(month) = self.selected_month() else {
            self.filtered.clear();
            self.filtered_total = Decimal::ZERO;
            self.comparison = MonthComparison::default();
            self.daily_average = Decimal::ZERO;
            self.breakdown.clear();
            self.payment_split = engine::payment_method_split(&[]);
            self.highest = None;
            self.most_active = None;
            return;
        };

        let view = engine::filter_transactions(&self.transactions, month, self.selected_category);
        self.filtered_total = engine::sum_amounts(view.iter().copied());
        self.payment_split = engine::payment_method_split(view.iter().copied());
        self.highest = engine::highest_expense(view.iter().copied()).cloned();
        self.most_active = engine::most_active_category(view.iter().copied());
        self.filtered = view.into_iter().cloned().collect();

        self.comparison = engine::month_over_month(&self.transactions, month);
        self.daily_average = engine::average_per_day(self.comparison.current);
        self.breakdown = engine::category_breakdown(&self.transactions, &self.budgets, month);

        if self.expense_index >= self.filtered.len() {
            self.expense_index = self.filtered.len().saturating_sub(1);
            self.expense_scroll = self.expense_scroll.min(self.expense_index);
        }
    }

    pub(crate) fn older_month(&mut self) {
        // Months are sorted most recent first
        if self.month_index + 1 < self.months.len() {
            self.month_index += 1;
            self.reset_cursor();
            self.refresh();
        }
    }

    pub(crate) fn newer_month(&mut self) {
        if self.month_index > 0 {
            self.month_index -= 1;
            self.reset_cursor();
            self.refresh();
        }
    }

    pub(crate) fn next_category(&mut self) {
        let all = Category::all();
        self.selected_category = match self.selected_category {
            None => all.first().copied(),
            Some(current) => {
                let pos = all.iter().position(|c| *c == current).unwrap_or(0);
                all.get(pos + 1).copied()
            }
        };
        self.reset_cursor();
        self.refresh();
    }

    pub(crate) fn prev_category(&mut self) {
        let all = Category::all();
        self.selected_category = match self.selected_category {
            None => all.last().copied(),
            Some(current) => match all.iter().position(|c| *c == current) {
                Some(0) | None => None,
                Some(pos) => all.get(pos - 1).copied(),
            },
        };
        self.reset_cursor();
        self.refresh();
    }

    pub(crate) fn clear_category(&mut self) {
        self.selected_category = None;
        self.reset_cursor();
        self.refresh();
    }

    fn reset_cursor(&mut self) {
        self.expense_index = 0;
        self.expense_scroll = 0;
    }
}
