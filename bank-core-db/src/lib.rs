pub mod models;
pub mod repository;
pub mod service;

pub use models::{AccountModel, Identifiable};
pub use repository::{Create, FindByOwner, Load, StoreError, StoreResult, Update};
pub use service::{AccountService, AccountStore, ServiceError, ServiceResult};
