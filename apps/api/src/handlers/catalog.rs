use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;

use gatehouse_core::UserIdentity;

use crate::dto::{
    CatalogEntryRequest, DeleteResponse, PermissionMutationResponse, PermissionResponse,
    RoleMutationResponse, RoleResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_roles_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .security_admin_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CatalogEntryRequest>,
) -> ApiResult<(StatusCode, Json<RoleMutationResponse>)> {
    let role = state
        .security_admin_service
        .create_role(Some(&user), payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(RoleMutationResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<CatalogEntryRequest>,
) -> ApiResult<Json<RoleMutationResponse>> {
    let role = state
        .security_admin_service
        .update_role(Some(&user), role_id.as_str(), payload.into())
        .await?;

    Ok(Json(RoleMutationResponse::from(role)))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .security_admin_service
        .delete_role(Some(&user), role_id.as_str())
        .await?;

    Ok(Json(DeleteResponse::from(deleted.map(|()| role_id))))
}

pub async fn list_permissions_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .security_admin_service
        .list_permissions()
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn create_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CatalogEntryRequest>,
) -> ApiResult<(StatusCode, Json<PermissionMutationResponse>)> {
    let permission = state
        .security_admin_service
        .create_permission(Some(&user), payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PermissionMutationResponse::from(permission)),
    ))
}

pub async fn update_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(permission_id): Path<String>,
    Json(payload): Json<CatalogEntryRequest>,
) -> ApiResult<Json<PermissionMutationResponse>> {
    let permission = state
        .security_admin_service
        .update_permission(Some(&user), permission_id.as_str(), payload.into())
        .await?;

    Ok(Json(PermissionMutationResponse::from(permission)))
}

pub async fn delete_permission_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(permission_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = state
        .security_admin_service
        .delete_permission(Some(&user), permission_id.as_str())
        .await?;

    Ok(Json(DeleteResponse::from(deleted.map(|()| permission_id))))
}
