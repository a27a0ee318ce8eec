use gatehouse_application::{
    AssociationStore, CatalogEntryChanges, NewCatalogEntry, PermissionRepository, RoleRepository,
};
use gatehouse_core::{AppError, NonEmptyString};
use gatehouse_domain::{AssociationKind, DesiredMembership, RecordId};

use crate::PostgresAssociationStore;
use crate::postgres_test_support::{test_pool, unique_id};

use super::PostgresCatalogRepository;

fn entry(id: &str, name: &str) -> NewCatalogEntry {
    match (RecordId::new(id), NonEmptyString::new(name)) {
        (Ok(id), Ok(name)) => NewCatalogEntry {
            id,
            name,
            description: Some("created in test".to_owned()),
        },
        _ => panic!("invalid catalog entry in test"),
    }
}

#[tokio::test]
async fn role_lifecycle_round_trips() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool);
    let role_id = unique_id("role");

    let created = repository.create_role(entry(&role_id, &role_id)).await;
    assert!(matches!(created, Ok(ref role) if role.description() == Some("created in test")));

    let Ok(name) = NonEmptyString::new(format!("{role_id}-renamed")) else {
        panic!("name should be valid");
    };
    let Ok(id) = RecordId::new(&role_id) else {
        panic!("id should be valid");
    };
    let updated = repository
        .update_role(
            &id,
            CatalogEntryChanges {
                name,
                description: None,
            },
        )
        .await;
    assert!(matches!(updated, Ok(ref role) if role.description().is_none()));

    let listed = repository.list_roles().await;
    assert!(matches!(listed, Ok(ref roles) if roles.iter().any(|role| role.id() == &id)));

    assert!(repository.delete_role(&id).await.is_ok());
    assert!(matches!(
        repository.delete_role(&id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn duplicate_permission_name_is_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool);
    let name = unique_id("reports.read");

    let first = repository
        .create_permission(entry(&unique_id("perm"), &name))
        .await;
    let second = repository
        .create_permission(entry(&unique_id("perm"), &name))
        .await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn deleting_role_cascades_role_permissions() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool.clone());
    let store = PostgresAssociationStore::new(pool);
    let role_id = unique_id("role");
    let permission_id = unique_id("perm");

    assert!(repository.create_role(entry(&role_id, &role_id)).await.is_ok());
    assert!(
        repository
            .create_permission(entry(&permission_id, &permission_id))
            .await
            .is_ok()
    );
    let Ok(membership) = DesiredMembership::new(&role_id, [permission_id.as_str()]) else {
        panic!("membership should be valid");
    };
    assert!(
        store
            .insert_many(AssociationKind::RolePermissions, &membership.associations())
            .await
            .is_ok()
    );

    assert!(repository.delete_role(membership.subject_id()).await.is_ok());

    let remaining = store
        .select_by_subject(AssociationKind::RolePermissions, membership.subject_id())
        .await;
    assert!(matches!(remaining, Ok(ref rows) if rows.is_empty()));
}

#[tokio::test]
async fn update_missing_permission_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool);
    let (Ok(id), Ok(name)) = (
        RecordId::new(unique_id("perm")),
        NonEmptyString::new("reports.write"),
    ) else {
        panic!("invalid input in test");
    };

    let result = repository
        .update_permission(
            &id,
            CatalogEntryChanges {
                name,
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
