/// How an expense was paid. Closed set, mirrored by the payment-mix card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    pub(crate) fn all() -> &'static [PaymentMethod] {
        &[Self::Card, Self::Cash, Self::BankTransfer]
    }

    /// Parse a payment method name (case-insensitive). Unknown names are
    /// rejected at load time.
    pub(crate) fn parse(s: &str) -> Option<PaymentMethod> {
        match s.to_lowercase().as_str() {
            "card" => Some(Self::Card),
            "cash" => Some(Self::Cash),
            "bank transfer" | "banktransfer" => Some(Self::BankTransfer),
            _ => None,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
