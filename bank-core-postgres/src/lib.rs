pub mod repository;
pub mod utils;

pub use repository::account_repository::AccountRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
