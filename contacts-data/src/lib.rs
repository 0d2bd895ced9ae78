//! # Contacts Data Layer
//!
//! This crate contains the data-access layer shared by the contacts service:
//! the entity model, the generic repository, and connection pool management.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their validation rules
//! - `repository`: Generic, entity-agnostic CRUD primitives
//! - `db`: PostgreSQL connection pool management
//! - `error`: Store-level error type

pub mod db;
pub mod error;
pub mod models;
pub mod repository;

/// Current version of the contacts data layer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
