pub mod create;
pub mod error;
pub mod find_by_owner;
pub mod load;
pub mod update;

// Re-exports
pub use create::*;
pub use error::*;
pub use find_by_owner::*;
pub use load::*;
pub use update::*;
