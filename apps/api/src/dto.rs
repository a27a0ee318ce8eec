mod assignments;
mod audit;
mod catalog;
mod common;
mod profile;

pub use assignments::{AssignmentsResponse, DirectoryUserResponse, SaveAssignmentsRequest};
pub use audit::{AuditLogEntryResponse, AuditLogListQuery};
pub use catalog::{
    CatalogEntryRequest, DeleteResponse, PermissionMutationResponse, PermissionResponse,
    RoleMutationResponse, RoleResponse,
};
pub use common::{HealthResponse, UserIdentityResponse};
pub use profile::{ProfileResponse, UpdateProfileRequest};

#[cfg(test)]
mod tests {
    use super::{
        AssignmentsResponse, AuditLogEntryResponse, CatalogEntryRequest, DeleteResponse,
        DirectoryUserResponse, HealthResponse, PermissionMutationResponse, PermissionResponse,
        ProfileResponse, RoleMutationResponse, RoleResponse, SaveAssignmentsRequest,
        UpdateProfileRequest, UserIdentityResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        CatalogEntryRequest::export(&config)?;
        RoleResponse::export(&config)?;
        RoleMutationResponse::export(&config)?;
        PermissionResponse::export(&config)?;
        PermissionMutationResponse::export(&config)?;
        DeleteResponse::export(&config)?;
        DirectoryUserResponse::export(&config)?;
        SaveAssignmentsRequest::export(&config)?;
        AssignmentsResponse::export(&config)?;
        AuditLogEntryResponse::export(&config)?;
        ProfileResponse::export(&config)?;
        UpdateProfileRequest::export(&config)?;
        ErrorResponse::export(&config)?;
        HealthResponse::export(&config)?;
        UserIdentityResponse::export(&config)?;

        Ok(())
    }
}
