use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{Account, AccountError, Amount, Operation, OverdraftInfo};

/// Application service providing the account operations.
/// This is the primary interface for any client (console menu, tests, etc.).
///
/// Every call holds the account lock for its whole check-then-update
/// sequence, so callers sharing the service through an `Arc` cannot drive
/// the balance past the overdraft limit.
pub struct AccountService {
    account: Mutex<Account>,
}

/// Outcome of a successful balance mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationResult {
    pub previous_balance: Amount,
    pub balance: Amount,
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new(Account::default())
    }
}

impl AccountService {
    /// Create a new service owning the given account.
    pub fn new(account: Account) -> Self {
        Self {
            account: Mutex::new(account),
        }
    }

    /// Open an account with a custom starting position.
    pub fn open(balance: Amount, overdraft_limit: Amount) -> Result<Self, AccountError> {
        Ok(Self::new(Account::open(balance, overdraft_limit)?))
    }

    // ========================
    // Queries
    // ========================

    pub async fn balance(&self) -> Amount {
        self.account.lock().await.balance()
    }

    pub async fn overdraft_info(&self) -> OverdraftInfo {
        self.account.lock().await.overdraft_info()
    }

    pub async fn is_using_overdraft(&self) -> bool {
        self.account.lock().await.is_using_overdraft()
    }

    /// Copy of the account as it is right now.
    pub async fn snapshot(&self) -> Account {
        self.account.lock().await.clone()
    }

    // ========================
    // Mutations
    // ========================

    pub async fn deposit(
        &self,
        amount: impl Into<Option<Amount>>,
    ) -> Result<OperationResult, AccountError> {
        self.apply(Operation::deposit(amount)).await
    }

    pub async fn withdraw(
        &self,
        amount: impl Into<Option<Amount>>,
    ) -> Result<OperationResult, AccountError> {
        self.apply(Operation::withdrawal(amount)).await
    }

    pub async fn pay_bill(
        &self,
        amount: impl Into<Option<Amount>>,
    ) -> Result<OperationResult, AccountError> {
        self.apply(Operation::bill_payment(amount)).await
    }

    /// Apply an operation to the account.
    pub async fn apply(&self, operation: Operation) -> Result<OperationResult, AccountError> {
        let mut account = self.account.lock().await;
        let previous_balance = account.balance();

        match account.apply(&operation) {
            Ok(()) => {
                let balance = account.balance();
                info!(
                    kind = %operation.kind,
                    debit = operation.kind.is_debit(),
                    amount = ?operation.amount,
                    %previous_balance,
                    %balance,
                    "operation applied"
                );
                Ok(OperationResult {
                    previous_balance,
                    balance,
                })
            }
            Err(err) => {
                debug!(
                    kind = %operation.kind,
                    debit = operation.kind.is_debit(),
                    amount = ?operation.amount,
                    balance = %previous_balance,
                    error = %err,
                    "operation rejected"
                );
                Err(err)
            }
        }
    }
}
