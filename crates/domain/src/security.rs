use std::str::FromStr;

use gatehouse_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::RecordId;

/// Mutation kinds recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// A resource was created.
    Create,
    /// A resource or association set was replaced.
    Update,
    /// A resource was deleted.
    Delete,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown audit action '{value}'"
            ))),
        }
    }
}

/// Logical resource types that appear in audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntity {
    /// Role catalog entry.
    Role,
    /// Permission catalog entry.
    Permission,
    /// Role set of a user.
    UserRoles,
    /// Permission set of a role.
    RolePermissions,
    /// User profile.
    Profile,
}

impl AuditEntity {
    /// Returns a stable storage value for this entity.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Permission => "permission",
            Self::UserRoles => "user_roles",
            Self::RolePermissions => "role_permissions",
            Self::Profile => "profile",
        }
    }
}

impl FromStr for AuditEntity {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "role" => Ok(Self::Role),
            "permission" => Ok(Self::Permission),
            "user_roles" => Ok(Self::UserRoles),
            "role_permissions" => Ok(Self::RolePermissions),
            "profile" => Ok(Self::Profile),
            _ => Err(AppError::Validation(format!(
                "unknown audit entity '{value}'"
            ))),
        }
    }
}

/// Many-to-many association tables managed by reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// Users (subject) to roles (object).
    UserRoles,
    /// Roles (subject) to permissions (object).
    RolePermissions,
}

impl AssociationKind {
    /// Returns the backing table name.
    #[must_use]
    pub fn table(&self) -> &'static str {
        match self {
            Self::UserRoles => "user_roles",
            Self::RolePermissions => "role_permissions",
        }
    }

    /// Returns the column holding the subject identifier.
    #[must_use]
    pub fn subject_column(&self) -> &'static str {
        match self {
            Self::UserRoles => "user_id",
            Self::RolePermissions => "role_id",
        }
    }

    /// Returns the column holding the object identifier.
    #[must_use]
    pub fn object_column(&self) -> &'static str {
        match self {
            Self::UserRoles => "role_id",
            Self::RolePermissions => "permission_id",
        }
    }

    /// Returns the audit entity written after reconciliation.
    #[must_use]
    pub fn audit_entity(&self) -> AuditEntity {
        match self {
            Self::UserRoles => AuditEntity::UserRoles,
            Self::RolePermissions => AuditEntity::RolePermissions,
        }
    }

    /// Returns the key under which object ids are listed in audit details.
    #[must_use]
    pub fn details_key(&self) -> &'static str {
        match self {
            Self::UserRoles => "roles",
            Self::RolePermissions => "permissions",
        }
    }

    /// Human label for the subject side, used in messages.
    #[must_use]
    pub fn subject_label(&self) -> &'static str {
        match self {
            Self::UserRoles => "user",
            Self::RolePermissions => "role",
        }
    }

    /// Builds the audit details snapshot for a resolved object set.
    #[must_use]
    pub fn audit_details(&self, object_ids: &[RecordId]) -> Value {
        let ids = object_ids
            .iter()
            .map(|object_id| Value::String(object_id.as_str().to_owned()))
            .collect();

        let mut details = Map::new();
        details.insert(self.details_key().to_owned(), Value::Array(ids));
        Value::Object(details)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::{AssociationKind, AuditAction, AuditEntity};
    use crate::RecordId;

    #[test]
    fn audit_entity_roundtrip_storage_value() {
        let entity = AuditEntity::RolePermissions;
        let restored = AuditEntity::from_str(entity.as_str());
        assert!(matches!(restored, Ok(AuditEntity::RolePermissions)));
    }

    #[test]
    fn unknown_audit_action_is_rejected() {
        assert!(AuditAction::from_str("upsert").is_err());
    }

    #[test]
    fn user_roles_details_list_roles() -> Result<(), gatehouse_core::AppError> {
        let object_ids = vec![RecordId::new("role-admin")?, RecordId::new("role-editor")?];

        let details = AssociationKind::UserRoles.audit_details(&object_ids);

        assert_eq!(details, json!({ "roles": ["role-admin", "role-editor"] }));
        Ok(())
    }

    #[test]
    fn role_permissions_map_to_their_table() {
        let kind = AssociationKind::RolePermissions;
        assert_eq!(kind.table(), "role_permissions");
        assert_eq!(kind.subject_column(), "role_id");
        assert_eq!(kind.object_column(), "permission_id");
        assert_eq!(kind.audit_entity(), AuditEntity::RolePermissions);
    }
}
