//! The account rules engine.
//!
//! Pure functions over account snapshots: each call either returns a new
//! snapshot with the balance and the transaction log updated together, or a
//! typed error and no change at all. `now` is passed in so the caller owns
//! the clock and the lock check stays deterministic under test.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{Account, AccountVariant, TransactionEntry, TransactionKind};
use crate::error::{AccountError, AccountResult};
use crate::AccountPolicy;

/// Apply a deposit to an account snapshot.
///
/// Fails with `InvalidAmount` for non-positive amounts and with
/// `UnsupportedOperation` for FixedDeposit accounts, which never accept
/// funds after creation. Deposits cannot violate a floor, so once the amount
/// is valid a Savings/Current deposit always succeeds.
pub fn deposit(account: &Account, amount: Decimal, now: DateTime<Utc>) -> AccountResult<Account> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount(amount));
    }

    if account.variant == AccountVariant::FixedDeposit {
        return Err(AccountError::UnsupportedOperation(
            "deposits into a fixed deposit account after creation",
        ));
    }

    Ok(applied(
        account,
        account.balance + amount,
        TransactionKind::Deposit,
        amount,
        now,
    ))
}

/// Apply a withdrawal to an account snapshot.
///
/// The floor checks run against the prospective balance `balance - amount`,
/// not the current one, so an account sitting exactly on its floor can never
/// tip below it in a single step.
pub fn withdraw(
    policy: &AccountPolicy,
    account: &Account,
    amount: Decimal,
    now: DateTime<Utc>,
) -> AccountResult<Account> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount(amount));
    }

    let prospective = account.balance - amount;

    match account.variant {
        AccountVariant::Savings => {
            if prospective < policy.minimum_savings_balance {
                return Err(AccountError::BelowMinimumBalance {
                    amount,
                    minimum: policy.minimum_savings_balance,
                });
            }
        }
        AccountVariant::Current => {
            if prospective < policy.overdraft_limit {
                return Err(AccountError::OverdraftExceeded {
                    amount,
                    limit: policy.overdraft_limit,
                });
            }
        }
        AccountVariant::FixedDeposit => {
            if !account.is_matured(now) {
                return Err(AccountError::FundsLocked {
                    // Variant invariant: FixedDeposit always carries a maturity date
                    maturity_date: account.maturity_date.unwrap_or(now),
                });
            }
            // No overdraft once matured
            if amount > account.balance {
                return Err(AccountError::InsufficientFunds {
                    amount,
                    available: account.balance,
                });
            }
        }
    }

    Ok(applied(
        account,
        prospective,
        TransactionKind::Withdrawal,
        amount,
        now,
    ))
}

/// Build the successor snapshot: new balance plus exactly one log entry
fn applied(
    account: &Account,
    new_balance: Decimal,
    kind: TransactionKind,
    amount: Decimal,
    now: DateTime<Utc>,
) -> Account {
    let mut next = account.clone();
    next.balance = new_balance;
    next.transactions.push(TransactionEntry {
        timestamp: now,
        kind,
        amount,
    });
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::factory::open_account;
    use chrono::Duration;
    use uuid::Uuid;

    fn policy() -> AccountPolicy {
        AccountPolicy::default()
    }

    fn savings(balance: i64) -> Account {
        open_account(
            &policy(),
            AccountVariant::Savings,
            Uuid::new_v4(),
            Decimal::from(balance),
            None,
            Utc::now(),
        )
        .unwrap()
    }

    fn current(balance: i64) -> Account {
        open_account(
            &policy(),
            AccountVariant::Current,
            Uuid::new_v4(),
            Decimal::from(balance),
            None,
            Utc::now(),
        )
        .unwrap()
    }

    fn fixed(balance: i64, now: DateTime<Utc>) -> Account {
        open_account(
            &policy(),
            AccountVariant::FixedDeposit,
            Uuid::new_v4(),
            Decimal::from(balance),
            None,
            now,
        )
        .unwrap()
    }

    #[test]
    fn deposit_increases_balance_and_appends_one_entry() {
        let account = savings(200);
        let updated = deposit(&account, Decimal::from(50), Utc::now()).unwrap();

        assert_eq!(updated.balance, Decimal::from(250));
        assert_eq!(updated.transactions.len(), 1);
        assert_eq!(updated.transactions[0].kind, TransactionKind::Deposit);
        assert_eq!(updated.transactions[0].amount, Decimal::from(50));
        // The input snapshot is untouched
        assert_eq!(account.balance, Decimal::from(200));
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let account = savings(200);
        for amount in [Decimal::ZERO, Decimal::from(-10)] {
            let err = deposit(&account, amount, Utc::now()).unwrap_err();
            assert_eq!(err, AccountError::InvalidAmount(amount));
        }
    }

    #[test]
    fn deposit_into_fixed_deposit_is_unsupported() {
        let account = fixed(500, Utc::now());
        let err = deposit(&account, Decimal::from(100), Utc::now()).unwrap_err();
        assert!(matches!(err, AccountError::UnsupportedOperation(_)));
    }

    #[test]
    fn savings_withdrawal_may_land_exactly_on_the_minimum() {
        let account = savings(150);
        let updated = withdraw(&policy(), &account, Decimal::from(50), Utc::now()).unwrap();
        assert_eq!(updated.balance, Decimal::from(100));
        assert_eq!(updated.transactions.len(), 1);
        assert_eq!(updated.transactions[0].kind, TransactionKind::Withdrawal);
    }

    #[test]
    fn savings_withdrawal_below_minimum_is_rejected() {
        let account = savings(150);
        let err = withdraw(&policy(), &account, Decimal::from(51), Utc::now()).unwrap_err();
        assert_eq!(
            err,
            AccountError::BelowMinimumBalance {
                amount: Decimal::from(51),
                minimum: Decimal::from(100),
            }
        );
    }

    #[test]
    fn current_withdrawal_may_land_exactly_on_the_overdraft_floor() {
        let account = current(0);
        let updated = withdraw(&policy(), &account, Decimal::from(500), Utc::now()).unwrap();
        assert_eq!(updated.balance, Decimal::from(-500));
    }

    #[test]
    fn current_withdrawal_past_the_overdraft_floor_is_rejected() {
        let account = current(0);
        let err = withdraw(&policy(), &account, Decimal::from(501), Utc::now()).unwrap_err();
        assert_eq!(
            err,
            AccountError::OverdraftExceeded {
                amount: Decimal::from(501),
                limit: Decimal::from(-500),
            }
        );
    }

    #[test]
    fn fixed_deposit_withdrawal_before_maturity_is_locked() {
        let opened = Utc::now();
        let account = fixed(500, opened);

        let err = withdraw(&policy(), &account, Decimal::from(1), opened).unwrap_err();
        assert!(matches!(err, AccountError::FundsLocked { .. }));

        // Still locked one second before maturity, regardless of amount
        let almost = account.maturity_date.unwrap() - Duration::seconds(1);
        let err = withdraw(&policy(), &account, Decimal::from(500), almost).unwrap_err();
        assert!(matches!(err, AccountError::FundsLocked { .. }));
    }

    #[test]
    fn matured_fixed_deposit_allows_withdrawal_up_to_balance() {
        let opened = Utc::now();
        let account = fixed(500, opened);
        let matured = account.maturity_date.unwrap();

        let updated = withdraw(&policy(), &account, Decimal::from(500), matured).unwrap();
        assert_eq!(updated.balance, Decimal::ZERO);

        let err = withdraw(&policy(), &account, Decimal::from(501), matured).unwrap_err();
        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                amount: Decimal::from(501),
                available: Decimal::from(500),
            }
        );
    }

    #[test]
    fn rejected_operations_leave_the_snapshot_unchanged() {
        let account = savings(150);

        assert!(withdraw(&policy(), &account, Decimal::from(51), Utc::now()).is_err());
        assert!(deposit(&account, Decimal::from(-1), Utc::now()).is_err());

        assert_eq!(account.balance, Decimal::from(150));
        assert_eq!(account.transactions.len(), 0);
    }

    #[test]
    fn deposit_then_withdraw_keeps_order_in_the_log() {
        let account = savings(200);
        let now = Utc::now();

        let account = deposit(&account, Decimal::from(100), now).unwrap();
        let account = withdraw(&policy(), &account, Decimal::from(100), now).unwrap();

        assert_eq!(account.balance, Decimal::from(200));
        assert_eq!(account.transactions.len(), 2);
        assert_eq!(account.transactions[0].kind, TransactionKind::Deposit);
        assert_eq!(account.transactions[1].kind, TransactionKind::Withdrawal);
    }
}
