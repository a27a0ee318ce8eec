use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use gatehouse_application::{
    CatalogEntryChanges, NewCatalogEntry, PermissionRepository, RoleRepository,
};
use gatehouse_core::{AppError, AppResult};
use gatehouse_domain::{Permission, RecordId, Role};

use crate::sqlx_errors::map_sqlx_error;

mod permissions;
mod roles;

#[cfg(test)]
mod tests;

/// PostgreSQL-backed repository for the role and permission catalogs.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CatalogRow {
    id: String,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl CatalogRow {
    fn into_role(self) -> AppResult<Role> {
        Role::new(RecordId::new(self.id)?, self.name, self.description, self.created_at)
    }

    fn into_permission(self) -> AppResult<Permission> {
        Permission::new(RecordId::new(self.id)?, self.name, self.description, self.created_at)
    }
}

fn not_found(label: &str, id: &RecordId) -> AppError {
    AppError::NotFound(format!("{label} '{id}' was not found"))
}
