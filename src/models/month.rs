use chrono::{Datelike, NaiveDate};

/// A calendar month. Derives `Ord` on (year, month) so sorting is
/// chronological; renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct MonthKey {
    pub(crate) year: i32,
    pub(crate) month: u32,
}

impl MonthKey {
    pub(crate) fn of(date: NaiveDate) -> MonthKey {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The calendar month immediately before this one. January rolls back to
    /// December of the prior year.
    pub(crate) fn previous(self) -> MonthKey {
        if self.month == 1 {
            MonthKey {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month - 1,
            }
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
