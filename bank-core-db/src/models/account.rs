use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use bank_core_api::domain::{
    deserialize_account_variant, serialize_account_variant, Account, AccountVariant,
    TransactionEntry,
};

use crate::models::identifiable::Identifiable;

/// Database model for a bank account.
///
/// The transaction log is persisted as a single JSONB document next to the
/// balance so both always change in one statement. `version` backs the
/// compare-and-swap in the update path; two writers racing on the same
/// snapshot means exactly one of them wins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountModel {
    pub id: Uuid,

    /// References the owning user; accounts are always read owner-scoped
    pub owner_id: Uuid,

    pub account_number: HeaplessString<16>,

    #[serde(
        serialize_with = "serialize_account_variant",
        deserialize_with = "deserialize_account_variant"
    )]
    pub account_type: AccountVariant,

    pub balance: Decimal,

    /// Only set for FixedDeposit accounts
    pub maturity_date: Option<DateTime<Utc>>,

    /// Append-only, chronological
    pub transactions: Json<Vec<TransactionEntry>>,

    /// Optimistic-concurrency counter, starts at 1 and bumps on every update
    pub version: i32,

    pub created_at: DateTime<Utc>,
}

impl AccountModel {
    /// Build a row from a freshly created domain account
    pub fn from_new_account(account: &Account) -> Self {
        Self::from_account(account, 1)
    }

    /// Build a row from a domain snapshot, carrying the version of the row
    /// the snapshot was loaded from
    pub fn from_account(account: &Account, version: i32) -> Self {
        Self {
            id: account.id,
            owner_id: account.owner_id,
            account_number: account.account_number.clone(),
            account_type: account.variant,
            balance: account.balance,
            maturity_date: account.maturity_date,
            transactions: Json(account.transactions.clone()),
            version,
            created_at: account.created_at,
        }
    }

    /// Convert back into the domain snapshot the rules engine works on
    pub fn to_account(&self) -> Account {
        Account {
            id: self.id,
            owner_id: self.owner_id,
            account_number: self.account_number.clone(),
            variant: self.account_type,
            balance: self.balance,
            maturity_date: self.maturity_date,
            transactions: self.transactions.0.clone(),
            created_at: self.created_at,
        }
    }
}

impl Identifiable for AccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_core_api::domain::AccountPolicy;
    use bank_core_api::service::{factory, rules};

    fn sample_account() -> Account {
        let policy = AccountPolicy::default();
        let account = factory::open_account(
            &policy,
            AccountVariant::Savings,
            Uuid::new_v4(),
            Decimal::from(200),
            None,
            Utc::now(),
        )
        .unwrap();
        let account = rules::deposit(&account, Decimal::from(50), Utc::now()).unwrap();
        rules::withdraw(&policy, &account, Decimal::from(25), Utc::now()).unwrap()
    }

    #[test]
    fn serde_round_trip_preserves_balance_variant_and_log_order() {
        let model = AccountModel::from_new_account(&sample_account());

        let json = serde_json::to_string(&model).unwrap();
        let restored: AccountModel = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id, model.id);
        assert_eq!(restored.account_type, model.account_type);
        assert_eq!(restored.balance, model.balance);
        assert_eq!(restored.transactions.0, model.transactions.0);
    }

    #[test]
    fn domain_round_trip_is_lossless() {
        let account = sample_account();
        let model = AccountModel::from_account(&account, 3);
        let restored = model.to_account();

        assert_eq!(restored.balance, account.balance);
        assert_eq!(restored.variant, account.variant);
        assert_eq!(restored.transactions, account.transactions);
        assert_eq!(model.version, 3);
    }

    #[test]
    fn variant_serializes_as_a_stable_tag() {
        let model = AccountModel::from_new_account(&sample_account());
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["account_type"], "Savings");
    }
}
