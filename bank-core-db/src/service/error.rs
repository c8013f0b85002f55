use thiserror::Error;

use bank_core_api::domain::AccountVariant;
use bank_core_api::error::AccountError;

use crate::repository::error::StoreError;

/// Errors surfaced to the API layer by the account service.
///
/// Rule rejections and store failures pass through transparently so the
/// transport mapping can stay exhaustive over the underlying taxonomies.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Also returned when the account exists but belongs to another owner
    #[error("Account not found")]
    AccountNotFound,

    #[error("An account of type {0} already exists for this user")]
    DuplicateAccountType(AccountVariant),

    #[error(transparent)]
    Rules(#[from] AccountError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
