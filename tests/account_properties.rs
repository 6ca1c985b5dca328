//! Property tests for the account rules: exact deposits and withdrawals,
//! rejection without side effects, and the derived overdraft figures.

use cli_bank::domain::{Account, Amount, OperationKind};
use proptest::prelude::*;

const LIMIT_CENTS: i64 = 100_000;

fn cents(value: i64) -> Amount {
    Amount::new(value, 2)
}

/// Any balance reachable under the default 1000.00 limit.
fn reachable_balance() -> impl Strategy<Value = Amount> {
    (-LIMIT_CENTS..=10_000_000i64).prop_map(cents)
}

fn positive_amount() -> impl Strategy<Value = Amount> {
    (1..=100_000_000i64).prop_map(cents)
}

fn non_positive_amount() -> impl Strategy<Value = Option<Amount>> {
    prop_oneof![
        Just(None),
        (-100_000_000..=0i64).prop_map(|value| Some(cents(value))),
    ]
}

fn account_at(balance: Amount) -> Account {
    Account::open(balance, cents(LIMIT_CENTS)).unwrap()
}

proptest! {
    /// A positive deposit raises the balance by exactly the amount.
    #[test]
    fn prop_deposit_adds_exactly(balance in reachable_balance(), amount in positive_amount()) {
        let mut account = account_at(balance);
        account.deposit(Some(amount)).unwrap();
        prop_assert_eq!(account.balance(), balance + amount);
    }

    /// Absent or non-positive amounts are refused and leave the balance alone.
    #[test]
    fn prop_invalid_amounts_are_rejected(balance in reachable_balance(), amount in non_positive_amount()) {
        let mut account = account_at(balance);

        let err = account.deposit(amount).unwrap_err();
        prop_assert!(err.is_invalid_amount());
        let err = account.withdraw(amount).unwrap_err();
        prop_assert!(err.is_invalid_amount());
        let err = account.pay_bill(amount).unwrap_err();
        prop_assert!(err.is_invalid_amount());

        prop_assert_eq!(account.balance(), balance);
    }

    /// Any amount within balance + limit is withdrawn exactly.
    #[test]
    fn prop_withdraw_within_headroom(balance in reachable_balance(), fraction in 1..=1000i64) {
        let mut account = account_at(balance);
        let headroom = account.total_available();
        prop_assume!(headroom > Amount::ZERO);

        let amount = (headroom * Amount::new(fraction, 3)).round_dp(2).max(cents(1));
        prop_assume!(amount <= headroom);

        account.withdraw(Some(amount)).unwrap();
        prop_assert_eq!(account.balance(), balance - amount);
        prop_assert!(account.balance() >= -account.overdraft_limit());
    }

    /// Anything above balance + limit fails with InsufficientFunds and no mutation.
    #[test]
    fn prop_withdraw_beyond_headroom(balance in reachable_balance(), excess in positive_amount()) {
        let mut account = account_at(balance);
        let amount = account.total_available() + excess;

        let err = account.withdraw(Some(amount)).unwrap_err();
        prop_assert!(err.is_insufficient_funds());
        let err = account.pay_bill(Some(amount)).unwrap_err();
        prop_assert!(err.is_insufficient_funds());

        prop_assert_eq!(account.balance(), balance);
    }

    /// Overdraft usage and the derived figures follow the balance sign.
    #[test]
    fn prop_overdraft_figures(balance in reachable_balance()) {
        let account = account_at(balance);
        let info = account.overdraft_info();

        prop_assert_eq!(account.is_using_overdraft(), balance < Amount::ZERO);
        prop_assert_eq!(info.used, (-balance).max(Amount::ZERO));
        prop_assert_eq!(info.available, info.limit - info.used);
        prop_assert!(info.available >= Amount::ZERO);
    }

    /// Random operation sequences never break balance >= -limit.
    #[test]
    fn prop_invariant_holds_over_sequences(
        steps in prop::collection::vec((0..3usize, 1..=50_000i64), 0..60)
    ) {
        let mut account = Account::default();

        for (kind, value) in steps {
            let kind = [OperationKind::Deposit, OperationKind::Withdrawal, OperationKind::BillPayment][kind];
            let before = account.balance();
            let result = match kind {
                OperationKind::Deposit => account.deposit(Some(cents(value))),
                OperationKind::Withdrawal => account.withdraw(Some(cents(value))),
                OperationKind::BillPayment => account.pay_bill(Some(cents(value))),
            };

            if result.is_err() {
                prop_assert_eq!(account.balance(), before);
            }
            prop_assert!(account.balance() >= -account.overdraft_limit());
        }
    }
}
