use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use bank_core_api::domain::{AccountPolicy, AccountVariant};
use bank_core_api::service::factory;
use bank_core_db::models::account::AccountModel;

/// Build a fresh account row of the given variant with a legal opening
/// balance for that variant.
pub fn create_test_account(variant: AccountVariant) -> AccountModel {
    let policy = AccountPolicy::default();
    let opening = match variant {
        AccountVariant::Savings => Decimal::from(200),
        AccountVariant::Current => Decimal::ZERO,
        AccountVariant::FixedDeposit => Decimal::from(500),
    };

    let account = factory::open_account(
        &policy,
        variant,
        Uuid::new_v4(),
        opening,
        None,
        Utc::now(),
    )
    .expect("test opening balance should be legal");

    AccountModel::from_new_account(&account)
}
