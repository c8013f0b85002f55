pub mod account_repository;
pub mod db_init;
