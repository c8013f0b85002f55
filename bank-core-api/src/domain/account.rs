use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AccountError;

/// The closed set of account kinds. Each kind carries its own floor/lock
/// rules; anything else is rejected at the parse boundary with
/// `InvalidAccountType`, so the rules engine never sees an unknown tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountVariant {
    Savings,
    Current,
    FixedDeposit,
}

impl std::fmt::Display for AccountVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountVariant::Savings => write!(f, "Savings"),
            AccountVariant::Current => write!(f, "Current"),
            AccountVariant::FixedDeposit => write!(f, "FixedDeposit"),
        }
    }
}

impl FromStr for AccountVariant {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "savings" => Ok(AccountVariant::Savings),
            "current" => Ok(AccountVariant::Current),
            "fixed" | "fixeddeposit" | "fixed_deposit" => Ok(AccountVariant::FixedDeposit),
            _ => Err(AccountError::InvalidAccountType(s.to_string())),
        }
    }
}

/// Direction of a balance movement in the transaction log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// One entry of the append-only transaction log.
///
/// Timestamps come from the single clock the caller supplies to the rules
/// functions and serialize as RFC 3339 so the log is stable across
/// implementations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub timestamp: DateTime<Utc>,

    #[serde(
        serialize_with = "serialize_transaction_kind",
        deserialize_with = "deserialize_transaction_kind"
    )]
    pub kind: TransactionKind,

    pub amount: Decimal,
}

/// An account snapshot.
///
/// The rules engine never mutates a snapshot in place; every successful
/// deposit/withdraw returns a new one with the balance and the log updated
/// together. Identity fields (`id`, `owner_id`, `variant`, `maturity_date`)
/// are fixed at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,

    /// Owning user, as resolved by the auth gateway. The core only records
    /// and compares this value, it never authenticates.
    pub owner_id: Uuid,

    /// Human-facing account number, assigned at creation
    pub account_number: HeaplessString<16>,

    #[serde(
        serialize_with = "serialize_account_variant",
        deserialize_with = "deserialize_account_variant"
    )]
    pub variant: AccountVariant,

    pub balance: Decimal,

    /// Set only for FixedDeposit accounts: `created_at + lock`
    pub maturity_date: Option<DateTime<Utc>>,

    pub transactions: Vec<TransactionEntry>,

    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[TransactionEntry] {
        &self.transactions
    }

    /// Whether a FixedDeposit account has reached maturity. Savings and
    /// Current accounts have no lock and are always considered matured.
    pub fn is_matured(&self, now: DateTime<Utc>) -> bool {
        match self.maturity_date {
            Some(maturity) => now >= maturity,
            None => true,
        }
    }
}

// Serialization functions for AccountVariant
pub fn serialize_account_variant<S>(
    variant: &AccountVariant,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let variant_str = match variant {
        AccountVariant::Savings => "Savings",
        AccountVariant::Current => "Current",
        AccountVariant::FixedDeposit => "FixedDeposit",
    };
    serializer.serialize_str(variant_str)
}

pub fn deserialize_account_variant<'de, D>(deserializer: D) -> Result<AccountVariant, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "Savings" => Ok(AccountVariant::Savings),
        "Current" => Ok(AccountVariant::Current),
        "FixedDeposit" => Ok(AccountVariant::FixedDeposit),
        _ => Err(serde::de::Error::custom(format!(
            "Invalid AccountVariant: {s}"
        ))),
    }
}

// Serialization functions for TransactionKind
pub fn serialize_transaction_kind<S>(
    kind: &TransactionKind,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let kind_str = match kind {
        TransactionKind::Deposit => "Deposit",
        TransactionKind::Withdrawal => "Withdrawal",
    };
    serializer.serialize_str(kind_str)
}

pub fn deserialize_transaction_kind<'de, D>(deserializer: D) -> Result<TransactionKind, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.as_str() {
        "Deposit" => Ok(TransactionKind::Deposit),
        "Withdrawal" => Ok(TransactionKind::Withdrawal),
        _ => Err(serde::de::Error::custom(format!(
            "Invalid TransactionKind: {s}"
        ))),
    }
}
