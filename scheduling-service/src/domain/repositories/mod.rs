pub mod version_repository;

pub use version_repository::VersionRepository;
