//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_security_repository;
mod postgres_association_store;
mod postgres_audit_log_repository;
mod postgres_audit_repository;
mod postgres_catalog_repository;
mod postgres_profile_repository;
mod sqlx_errors;

#[cfg(test)]
mod postgres_test_support;

pub use in_memory_security_repository::InMemorySecurityRepository;
pub use postgres_association_store::PostgresAssociationStore;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_audit_repository::PostgresAuditRepository;
pub use postgres_catalog_repository::PostgresCatalogRepository;
pub use postgres_profile_repository::PostgresProfileRepository;

/// Embedded schema migrations for the PostgreSQL adapters.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
