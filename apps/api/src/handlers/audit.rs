use axum::Json;
use axum::extract::{Query, State};

use crate::dto::{AuditLogEntryResponse, AuditLogListQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_audit_logs_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditLogListQuery>,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>> {
    let entries = state
        .audit_log_service
        .list_recent(query.into_query()?)
        .await?
        .into_iter()
        .map(AuditLogEntryResponse::from)
        .collect();

    Ok(Json(entries))
}
