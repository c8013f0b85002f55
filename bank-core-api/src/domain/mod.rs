pub mod account;
pub mod policy;

// Re-exports
pub use account::*;
pub use policy::*;
