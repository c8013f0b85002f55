pub mod repo_impl;

pub mod create;
pub mod find_by_owner;
pub mod load;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::AccountRepositoryImpl;
