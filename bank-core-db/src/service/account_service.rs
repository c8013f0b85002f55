//! Orchestration between the pure rules engine and an account store.
//!
//! Every mutation is load -> rules -> compare-and-swap save. The rules run
//! on a freshly read snapshot; if the save loses the version race the whole
//! cycle is retried against a re-read snapshot, a bounded number of times.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::Database;
use tracing::debug;
use uuid::Uuid;

use bank_core_api::domain::{Account, AccountPolicy, AccountVariant, TransactionEntry};
use bank_core_api::error::AccountResult;
use bank_core_api::service::{factory, rules};

use crate::models::account::AccountModel;
use crate::repository::{Create, FindByOwner, Load, StoreError, Update};
use crate::service::error::{ServiceError, ServiceResult};

/// Everything the account service needs from a persistence backend
pub trait AccountStore<DB: Database>:
    Load<DB, AccountModel> + Create<DB, AccountModel> + Update<DB, AccountModel> + FindByOwner<DB>
{
}

impl<DB: Database, S> AccountStore<DB> for S where
    S: Load<DB, AccountModel>
        + Create<DB, AccountModel>
        + Update<DB, AccountModel>
        + FindByOwner<DB>
{
}

/// Retries per mutation before a version conflict is surfaced to the caller
const MAX_CONFLICT_RETRIES: u32 = 3;

pub struct AccountService<DB: Database, S: AccountStore<DB>> {
    store: S,
    policy: AccountPolicy,
    _db: PhantomData<fn() -> DB>,
}

impl<DB: Database, S: AccountStore<DB>> AccountService<DB, S> {
    pub fn new(store: S, policy: AccountPolicy) -> Self {
        Self {
            store,
            policy,
            _db: PhantomData,
        }
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    /// Open a new account for an owner, one account per variant.
    ///
    /// The variant check here is advisory; the store's unique index on
    /// (owner, type) backs it under concurrent opens.
    pub async fn open_account(
        &self,
        owner_id: Uuid,
        variant: AccountVariant,
        initial_deposit: Decimal,
        term_months: Option<u32>,
    ) -> ServiceResult<Account> {
        if self
            .store
            .find_by_owner_and_type(owner_id, variant)
            .await?
            .is_some()
        {
            return Err(ServiceError::DuplicateAccountType(variant));
        }

        let account = factory::open_account(
            &self.policy,
            variant,
            owner_id,
            initial_deposit,
            term_months,
            Utc::now(),
        )?;

        let saved = self.store.create(AccountModel::from_new_account(&account)).await?;
        debug!(account_id = %saved.id, %variant, "account opened");
        Ok(saved.to_account())
    }

    pub async fn deposit(
        &self,
        account_id: Uuid,
        owner_id: Uuid,
        amount: Decimal,
    ) -> ServiceResult<Account> {
        self.mutate(account_id, owner_id, |account, now| {
            rules::deposit(account, amount, now)
        })
        .await
    }

    pub async fn withdraw(
        &self,
        account_id: Uuid,
        owner_id: Uuid,
        amount: Decimal,
    ) -> ServiceResult<Account> {
        self.mutate(account_id, owner_id, |account, now| {
            rules::withdraw(&self.policy, account, amount, now)
        })
        .await
    }

    /// Current balance, owner-scoped
    pub async fn balance(&self, account_id: Uuid, owner_id: Uuid) -> ServiceResult<Decimal> {
        let model = self.load_owned(account_id, owner_id).await?;
        Ok(model.balance)
    }

    /// Full transaction history in chronological order, owner-scoped
    pub async fn transactions(
        &self,
        account_id: Uuid,
        owner_id: Uuid,
    ) -> ServiceResult<Vec<TransactionEntry>> {
        let model = self.load_owned(account_id, owner_id).await?;
        Ok(model.transactions.0)
    }

    pub async fn accounts_of(&self, owner_id: Uuid) -> ServiceResult<Vec<Account>> {
        let models = self.store.find_by_owner(owner_id).await?;
        Ok(models.iter().map(AccountModel::to_account).collect())
    }

    /// Load an account and verify ownership. A mismatch reads as not-found
    /// so callers cannot probe for other users' account ids.
    async fn load_owned(&self, account_id: Uuid, owner_id: Uuid) -> ServiceResult<AccountModel> {
        let model = self
            .store
            .load(account_id)
            .await?
            .ok_or(ServiceError::AccountNotFound)?;
        if model.owner_id != owner_id {
            return Err(ServiceError::AccountNotFound);
        }
        Ok(model)
    }

    /// Shared load -> rules -> save cycle with bounded conflict retry
    async fn mutate<F>(&self, account_id: Uuid, owner_id: Uuid, apply: F) -> ServiceResult<Account>
    where
        F: Fn(&Account, DateTime<Utc>) -> AccountResult<Account>,
    {
        let mut attempt = 0;
        loop {
            let model = self.load_owned(account_id, owner_id).await?;
            let updated = apply(&model.to_account(), Utc::now())?;

            match self
                .store
                .update(AccountModel::from_account(&updated, model.version))
                .await
            {
                Ok(saved) => return Ok(saved.to_account()),
                Err(StoreError::Conflict { id }) if attempt < MAX_CONFLICT_RETRIES => {
                    attempt += 1;
                    debug!(account_id = %id, attempt, "version conflict, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
