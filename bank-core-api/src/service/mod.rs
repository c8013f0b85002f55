pub mod auth;
pub mod factory;
pub mod rules;

// Re-exports
pub use auth::*;
pub use factory::*;
pub use rules::*;
