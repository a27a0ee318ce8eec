//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod catalog;
mod membership;
mod security;
mod user;

pub use catalog::{Permission, RecordId, Role};
pub use membership::{Association, DesiredMembership};
pub use security::{AssociationKind, AuditAction, AuditEntity};
pub use user::{DirectoryUser, Profile};
