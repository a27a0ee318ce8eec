use super::*;

#[async_trait]
impl ProfileRepository for InMemorySecurityRepository {
    async fn find_profile(&self, user_id: &RecordId) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn upsert_profile(&self, profile: Profile) -> AppResult<Profile> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id().clone(), profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl UserDirectory for InMemorySecurityRepository {
    async fn list_users(&self) -> AppResult<Vec<DirectoryUser>> {
        let mut users = self.users.read().await.clone();
        users.sort_by(|left, right| left.email().cmp(right.email()));
        Ok(users)
    }
}
