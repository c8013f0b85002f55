//! Account creation.
//!
//! Builds the in-memory entity only; persisting the result is the caller's
//! job via the account store.

use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rand::Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Account, AccountPolicy, AccountVariant};
use crate::error::{AccountError, AccountResult};

const ACCOUNT_NUMBER_DIGITS: usize = 12;

/// Create a new account of the requested variant.
///
/// Opening constraints per variant:
/// - Savings must open at or above the minimum balance.
/// - Current may open anywhere down to the overdraft floor, negative
///   openings included.
/// - FixedDeposit must open strictly positive and gets
///   `maturity_date = now + lock`, where the lock is the policy default or
///   the requested term in months.
pub fn open_account(
    policy: &AccountPolicy,
    variant: AccountVariant,
    owner_id: Uuid,
    initial_balance: Decimal,
    term_months: Option<u32>,
    now: DateTime<Utc>,
) -> AccountResult<Account> {
    let maturity_date = match variant {
        AccountVariant::Savings => {
            if initial_balance < policy.minimum_savings_balance {
                return Err(AccountError::InvalidAmount(initial_balance));
            }
            None
        }
        AccountVariant::Current => {
            if initial_balance < policy.overdraft_limit {
                return Err(AccountError::InvalidAmount(initial_balance));
            }
            None
        }
        AccountVariant::FixedDeposit => {
            if initial_balance <= Decimal::ZERO {
                return Err(AccountError::InvalidAmount(initial_balance));
            }
            Some(now + policy.lock_for_term(term_months))
        }
    };

    Ok(Account {
        id: Uuid::new_v4(),
        owner_id,
        account_number: generate_account_number(),
        variant,
        balance: initial_balance,
        maturity_date,
        transactions: Vec::new(),
        created_at: now,
    })
}

/// Random numeric account number, 12 digits
fn generate_account_number() -> HeaplessString<16> {
    let mut rng = rand::thread_rng();
    let mut number = HeaplessString::new();
    for _ in 0..ACCOUNT_NUMBER_DIGITS {
        let digit: u8 = rng.gen_range(0..10);
        // Cannot overflow: 12 digits into a 16-char buffer
        let _ = number.push(char::from(b'0' + digit));
    }
    number
}
