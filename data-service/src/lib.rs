//! Data Service Library
//!
//! This module exposes the internal modules for integration testing.

pub mod api;
pub mod domain;
pub mod infrastructure;
