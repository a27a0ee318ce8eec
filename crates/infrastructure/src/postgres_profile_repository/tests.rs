use gatehouse_application::{ProfileRepository, UserDirectory};
use gatehouse_domain::{Profile, RecordId};

use crate::postgres_test_support::{insert_user, test_pool, unique_id};

use super::PostgresProfileRepository;

#[tokio::test]
async fn upsert_replaces_full_name() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProfileRepository::new(pool);
    let user_id = unique_id("user");

    let (Ok(first), Ok(second)) = (
        Profile::new(&user_id, Some("Ada".to_owned())),
        Profile::new(&user_id, Some("Ada Lovelace".to_owned())),
    ) else {
        panic!("invalid profile in test");
    };
    assert!(repository.upsert_profile(first).await.is_ok());
    assert!(repository.upsert_profile(second).await.is_ok());

    let Ok(id) = RecordId::new(&user_id) else {
        panic!("invalid id in test");
    };
    let stored = repository.find_profile(&id).await;
    assert!(matches!(
        stored,
        Ok(Some(ref profile)) if profile.full_name() == Some("Ada Lovelace")
    ));
}

#[tokio::test]
async fn missing_profile_is_none() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProfileRepository::new(pool);
    let Ok(id) = RecordId::new(unique_id("user")) else {
        panic!("invalid id in test");
    };

    assert!(matches!(repository.find_profile(&id).await, Ok(None)));
}

#[tokio::test]
async fn directory_lists_users() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresProfileRepository::new(pool.clone());
    let user_id = unique_id("user");
    insert_user(&pool, &user_id).await;

    let users = repository.list_users().await;
    let Ok(users) = users else {
        panic!("listing users should succeed");
    };
    assert!(
        users
            .iter()
            .any(|user| user.id().as_str() == user_id
                && user.email() == format!("{user_id}@example.com"))
    );
}
