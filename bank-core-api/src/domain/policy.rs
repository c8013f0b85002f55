use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-variant balance rules, kept as configuration rather than hard-coded
/// constants.
///
/// The defaults follow the current product sheet: 100 minimum for Savings,
/// -500 overdraft floor for Current, 30-day lock for FixedDeposit unless the
/// caller asks for a term in months.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Floor a Savings balance may never go below
    pub minimum_savings_balance: Decimal,

    /// Floor a Current balance may never go below (negative)
    pub overdraft_limit: Decimal,

    /// Default FixedDeposit lock, applied when no term is requested
    pub default_lock_days: i64,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            minimum_savings_balance: Decimal::from(100),
            overdraft_limit: Decimal::from(-500),
            default_lock_days: 30,
        }
    }
}

impl AccountPolicy {
    /// Lock duration for a FixedDeposit term, months are billed as 30 days
    pub fn lock_for_term(&self, term_months: Option<u32>) -> Duration {
        match term_months {
            Some(months) => Duration::days(30 * i64::from(months)),
            None => Duration::days(self.default_lock_days),
        }
    }
}
