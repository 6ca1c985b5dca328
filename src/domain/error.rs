use thiserror::Error;

use super::{Amount, OperationKind};

/// Reasons an account operation is refused. A refused operation never
/// changes the account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("The {} amount must be positive", .kind.noun())]
    InvalidAmount {
        kind: OperationKind,
        amount: Option<Amount>,
    },

    #[error(
        "Insufficient funds (including overdraft): requested {requested}, balance {balance}, overdraft limit {overdraft_limit}"
    )]
    InsufficientFunds {
        requested: Amount,
        balance: Amount,
        overdraft_limit: Amount,
    },

    #[error("Invalid opening configuration: {0}")]
    InvalidOpening(String),
}

impl AccountError {
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, AccountError::InvalidAmount { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_error_display() {
        let err = AccountError::InvalidAmount {
            kind: OperationKind::Deposit,
            amount: Some(dec!(-5)),
        };
        assert_eq!(err.to_string(), "The deposit amount must be positive");

        let err = AccountError::InvalidAmount {
            kind: OperationKind::BillPayment,
            amount: None,
        };
        assert_eq!(err.to_string(), "The operation amount must be positive");

        let err = AccountError::InsufficientFunds {
            requested: dec!(1500),
            balance: dec!(200),
            overdraft_limit: dec!(1000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds (including overdraft): requested 1500, balance 200, overdraft limit 1000"
        );
    }

    #[test]
    fn test_error_checks() {
        let err = AccountError::InvalidAmount {
            kind: OperationKind::Withdrawal,
            amount: Some(dec!(0)),
        };
        assert!(err.is_invalid_amount());
        assert!(!err.is_insufficient_funds());

        let err = AccountError::InsufficientFunds {
            requested: dec!(0.01),
            balance: dec!(-1000),
            overdraft_limit: dec!(1000),
        };
        assert!(err.is_insufficient_funds());
    }
}
