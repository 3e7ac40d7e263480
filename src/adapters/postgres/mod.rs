//! PostgreSQL adapters.

mod dream_repository;

pub use dream_repository::PostgresDreamRepository;
