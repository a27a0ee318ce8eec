use axum::Json;
use axum::extract::{Extension, State};

use gatehouse_core::UserIdentity;

use crate::dto::{ProfileResponse, UpdateProfileRequest, UserIdentityResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn me_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<UserIdentityResponse>> {
    let roles = state.assignment_service.role_names(user.subject()).await?;

    Ok(Json(UserIdentityResponse::new(&user, roles)))
}

pub async fn profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.profile_service.profile(&user).await?;

    Ok(Json(ProfileResponse::from(profile)))
}

pub async fn update_profile_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .profile_service
        .update_profile(&user, payload.full_name)
        .await?;

    Ok(Json(ProfileResponse::from(profile)))
}
