use gatehouse_application::{Audited, CatalogEntryInput};
use gatehouse_domain::{Permission, Role};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role or permission creation and updates.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/catalog-entry-request.ts"
)]
pub struct CatalogEntryRequest {
    /// Ignored on update. Generated when absent on create.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CatalogEntryRequest> for CatalogEntryInput {
    fn from(value: CatalogEntryRequest) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            description: value.description().map(ToOwned::to_owned),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Role returned by a mutation, with the audit status.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-mutation-response.ts"
)]
pub struct RoleMutationResponse {
    pub role: RoleResponse,
    pub audit_warning: Option<String>,
}

impl From<Audited<Role>> for RoleMutationResponse {
    fn from(value: Audited<Role>) -> Self {
        let audit_warning = value.audit_warning();
        Self {
            role: RoleResponse::from(value.value),
            audit_warning,
        }
    }
}

/// API representation of a permission.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Permission> for PermissionResponse {
    fn from(value: Permission) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_string(),
            description: value.description().map(ToOwned::to_owned),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

/// Permission returned by a mutation, with the audit status.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-mutation-response.ts"
)]
pub struct PermissionMutationResponse {
    pub permission: PermissionResponse,
    pub audit_warning: Option<String>,
}

impl From<Audited<Permission>> for PermissionMutationResponse {
    fn from(value: Audited<Permission>) -> Self {
        let audit_warning = value.audit_warning();
        Self {
            permission: PermissionResponse::from(value.value),
            audit_warning,
        }
    }
}

/// Result of a delete.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/delete-response.ts"
)]
pub struct DeleteResponse {
    pub deleted: String,
    pub audit_warning: Option<String>,
}

impl From<Audited<String>> for DeleteResponse {
    fn from(value: Audited<String>) -> Self {
        let audit_warning = value.audit_warning();
        Self {
            deleted: value.value,
            audit_warning,
        }
    }
}
