use axum::Json;
use axum::extract::{Extension, Path, State};

use gatehouse_core::UserIdentity;

use crate::dto::{AssignmentsResponse, DirectoryUserResponse, SaveAssignmentsRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DirectoryUserResponse>>> {
    let users = state
        .assignment_service
        .list_users()
        .await?
        .into_iter()
        .map(DirectoryUserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn user_roles_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<AssignmentsResponse>> {
    let role_ids = state.assignment_service.assigned_roles(&user_id).await?;

    Ok(Json(AssignmentsResponse::current(&user_id, role_ids)))
}

pub async fn save_user_roles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(user_id): Path<String>,
    Json(payload): Json<SaveAssignmentsRequest>,
) -> ApiResult<Json<AssignmentsResponse>> {
    let membership = state
        .assignment_service
        .save_user_roles(Some(&user), &user_id, payload.ids)
        .await?
        .into_result()?;

    Ok(Json(AssignmentsResponse::reconciled(&user_id, membership)))
}

pub async fn role_permissions_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<AssignmentsResponse>> {
    let permission_ids = state
        .assignment_service
        .assigned_permissions(&role_id)
        .await?;

    Ok(Json(AssignmentsResponse::current(&role_id, permission_ids)))
}

pub async fn save_role_permissions_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<SaveAssignmentsRequest>,
) -> ApiResult<Json<AssignmentsResponse>> {
    let membership = state
        .assignment_service
        .save_role_permissions(Some(&user), &role_id, payload.ids)
        .await?
        .into_result()?;

    Ok(Json(AssignmentsResponse::reconciled(&role_id, membership)))
}
