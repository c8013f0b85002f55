pub mod account;
pub mod identifiable;

// Re-exports
pub use account::*;
pub use identifiable::*;
