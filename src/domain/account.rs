use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{AccountError, Amount, Operation, OperationKind};

pub const DEFAULT_OPENING_BALANCE: Amount = dec!(200.00);
pub const DEFAULT_OVERDRAFT_LIMIT: Amount = dec!(1000.00);

/// Snapshot of the overdraft position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverdraftInfo {
    pub limit: Amount,
    pub used: Amount,
    pub available: Amount,
}

/// A single checking account with a fixed overdraft limit.
///
/// The balance may go negative, but never below `-overdraft_limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Amount,
    overdraft_limit: Amount,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: DEFAULT_OPENING_BALANCE,
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }
}

impl Account {
    /// Open an account with a custom starting position.
    pub fn open(balance: Amount, overdraft_limit: Amount) -> Result<Self, AccountError> {
        if overdraft_limit <= Decimal::ZERO {
            return Err(AccountError::InvalidOpening(format!(
                "overdraft limit must be positive, got {}",
                overdraft_limit
            )));
        }
        if balance < -overdraft_limit {
            return Err(AccountError::InvalidOpening(format!(
                "opening balance {} exceeds the overdraft limit {}",
                balance, overdraft_limit
            )));
        }

        Ok(Self {
            balance,
            overdraft_limit,
        })
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Amount {
        self.overdraft_limit
    }

    /// Balance plus the whole overdraft limit: the most that can be taken out.
    /// Saturates at `Decimal::MAX` when the sum does not fit.
    pub fn total_available(&self) -> Amount {
        self.balance
            .checked_add(self.overdraft_limit)
            .unwrap_or(Decimal::MAX)
    }

    pub fn overdraft_info(&self) -> OverdraftInfo {
        let used = if self.balance < Decimal::ZERO {
            self.balance.abs()
        } else {
            Decimal::ZERO
        };

        OverdraftInfo {
            limit: self.overdraft_limit,
            used,
            available: self.overdraft_limit - used,
        }
    }

    pub fn is_using_overdraft(&self) -> bool {
        self.balance < Decimal::ZERO
    }

    pub fn deposit(&mut self, amount: Option<Amount>) -> Result<(), AccountError> {
        let amount = require_positive(OperationKind::Deposit, amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::InvalidAmount {
                kind: OperationKind::Deposit,
                amount: Some(amount),
            })?;

        Ok(())
    }

    pub fn withdraw(&mut self, amount: Option<Amount>) -> Result<(), AccountError> {
        self.debit(OperationKind::Withdrawal, amount)
    }

    pub fn pay_bill(&mut self, amount: Option<Amount>) -> Result<(), AccountError> {
        self.debit(OperationKind::BillPayment, amount)
    }

    pub fn apply(&mut self, operation: &Operation) -> Result<(), AccountError> {
        match operation.kind {
            OperationKind::Deposit => self.deposit(operation.amount),
            OperationKind::Withdrawal => self.withdraw(operation.amount),
            OperationKind::BillPayment => self.pay_bill(operation.amount),
        }
    }

    fn debit(&mut self, kind: OperationKind, amount: Option<Amount>) -> Result<(), AccountError> {
        let amount = require_positive(kind, amount)?;

        if self.total_available() < amount {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
                overdraft_limit: self.overdraft_limit,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

fn require_positive(kind: OperationKind, amount: Option<Amount>) -> Result<Amount, AccountError> {
    match amount {
        Some(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(AccountError::InvalidAmount { kind, amount }),
    }
}
