use gatehouse_application::Audited;
use gatehouse_domain::Profile;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for profile updates.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-profile-request.ts"
)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// API representation of the caller's profile.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/profile-response.ts"
)]
pub struct ProfileResponse {
    pub user_id: String,
    pub full_name: String,
    pub audit_warning: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        Self {
            user_id: value.user_id().to_string(),
            full_name: value.full_name().unwrap_or_default().to_owned(),
            audit_warning: None,
        }
    }
}

impl From<Audited<Profile>> for ProfileResponse {
    fn from(value: Audited<Profile>) -> Self {
        let audit_warning = value.audit_warning();
        Self {
            audit_warning,
            ..Self::from(value.value)
        }
    }
}
