pub mod config;
pub mod database;
pub mod redis;
pub mod repositories;
pub mod snapshot_service;

pub use snapshot_service::SnapshotService;
