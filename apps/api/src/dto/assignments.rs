use gatehouse_application::ReconciledMembership;
use gatehouse_domain::{DirectoryUser, RecordId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a user that can receive roles.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/directory-user-response.ts"
)]
pub struct DirectoryUserResponse {
    pub id: String,
    pub email: String,
}

impl From<DirectoryUser> for DirectoryUserResponse {
    fn from(value: DirectoryUser) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().to_owned(),
        }
    }
}

/// Desired role ids of a user or permission ids of a role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/save-assignments-request.ts"
)]
pub struct SaveAssignmentsRequest {
    pub ids: Vec<String>,
}

/// Current association set of one subject.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assignments-response.ts"
)]
pub struct AssignmentsResponse {
    pub subject_id: String,
    pub ids: Vec<String>,
    pub audit_warning: Option<String>,
}

impl AssignmentsResponse {
    pub fn current(subject_id: &str, ids: Vec<RecordId>) -> Self {
        Self {
            subject_id: subject_id.trim().to_owned(),
            ids: ids.into_iter().map(String::from).collect(),
            audit_warning: None,
        }
    }

    pub fn reconciled(subject_id: &str, membership: ReconciledMembership) -> Self {
        Self {
            audit_warning: membership.audit_warning,
            ..Self::current(subject_id, membership.object_ids)
        }
    }
}
