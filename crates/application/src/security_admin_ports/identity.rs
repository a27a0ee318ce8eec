use async_trait::async_trait;

use gatehouse_core::{AppResult, UserIdentity};
use gatehouse_domain::{DirectoryUser, Profile, RecordId};

/// Port resolving the principal behind the current call.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the acting principal, or `None` for anonymous calls.
    async fn current_principal(&self) -> AppResult<Option<UserIdentity>>;
}

/// Read-only port over users known to the identity provider.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Lists users ordered by email.
    async fn list_users(&self) -> AppResult<Vec<DirectoryUser>>;
}

/// Repository port for user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Finds the profile of one user.
    async fn find_profile(&self, user_id: &RecordId) -> AppResult<Option<Profile>>;

    /// Inserts or replaces a profile.
    async fn upsert_profile(&self, profile: Profile) -> AppResult<Profile>;
}
