pub mod postgres_version_repository;

pub use postgres_version_repository::PostgresVersionRepository;
