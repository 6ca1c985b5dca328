use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    /// Paying a bill moves money out exactly like a withdrawal.
    BillPayment,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
            OperationKind::BillPayment => "bill_payment",
        }
    }

    /// Word used in user-facing validation messages.
    pub fn noun(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal | OperationKind::BillPayment => "operation",
        }
    }

    pub fn is_debit(&self) -> bool {
        matches!(self, OperationKind::Withdrawal | OperationKind::BillPayment)
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A requested balance mutation. The amount is optional so that a caller
/// which failed to supply one gets a validation error instead of a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub amount: Option<Amount>,
}

impl Operation {
    pub fn new(kind: OperationKind, amount: impl Into<Option<Amount>>) -> Self {
        Self {
            kind,
            amount: amount.into(),
        }
    }

    pub fn deposit(amount: impl Into<Option<Amount>>) -> Self {
        Self::new(OperationKind::Deposit, amount)
    }

    pub fn withdrawal(amount: impl Into<Option<Amount>>) -> Self {
        Self::new(OperationKind::Withdrawal, amount)
    }

    pub fn bill_payment(amount: impl Into<Option<Amount>>) -> Self {
        Self::new(OperationKind::BillPayment, amount)
    }
}
