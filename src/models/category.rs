/// Expense categories. The set is closed: every transaction and every budget
/// entry must carry one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Housing,
    Food,
    Transportation,
    Health,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Health,
            Self::Entertainment,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// Parse a category name (case-insensitive). Unknown names are rejected,
    /// not coerced; the data loader turns `None` into a startup error.
    pub(crate) fn parse(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "housing" => Some(Self::Housing),
            "food" => Some(Self::Food),
            "transportation" => Some(Self::Transportation),
            "health" => Some(Self::Health),
            "entertainment" => Some(Self::Entertainment),
            "utilities" => Some(Self::Utilities),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Label shown in the UI, which differs from the canonical name for a
    /// couple of categories.
    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Transportation => "Transport",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
