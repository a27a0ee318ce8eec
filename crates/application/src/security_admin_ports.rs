mod associations;
mod audit;
mod catalog;
mod identity;

pub use associations::AssociationStore;
pub use audit::{AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository};
pub use catalog::{CatalogEntryChanges, NewCatalogEntry, PermissionRepository, RoleRepository};
pub use identity::{IdentityProvider, ProfileRepository, UserDirectory};
