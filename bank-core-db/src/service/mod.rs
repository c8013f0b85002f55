pub mod account_service;
pub mod error;

// Re-exports
pub use account_service::*;
pub use error::*;
