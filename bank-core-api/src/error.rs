use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures raised by the account rules and the account factory.
///
/// Every variant is a local, non-retryable rejection: the caller gets the
/// untouched account snapshot back and maps the variant to a transport-level
/// response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Withdrawal of {amount} would breach the minimum balance of {minimum}")]
    BelowMinimumBalance { amount: Decimal, minimum: Decimal },

    #[error("Withdrawal of {amount} would exceed the overdraft limit of {limit}")]
    OverdraftExceeded { amount: Decimal, limit: Decimal },

    #[error("Funds are locked until {maturity_date}")]
    FundsLocked {
        maturity_date: chrono::DateTime<chrono::Utc>,
    },

    #[error("Insufficient funds: requested {amount}, available {available}")]
    InsufficientFunds { amount: Decimal, available: Decimal },

    #[error("Operation not supported for this account type: {0}")]
    UnsupportedOperation(&'static str),

    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),
}

pub type AccountResult<T> = Result<T, AccountError>;
