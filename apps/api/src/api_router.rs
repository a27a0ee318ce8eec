use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, put};
use gatehouse_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route("/api/me", get(handlers::profile::me_handler))
        .route(
            "/api/profile",
            get(handlers::profile::profile_handler).put(handlers::profile::update_profile_handler),
        )
        .route(
            "/api/roles",
            get(handlers::catalog::list_roles_handler).post(handlers::catalog::create_role_handler),
        )
        .route(
            "/api/roles/{role_id}",
            put(handlers::catalog::update_role_handler)
                .delete(handlers::catalog::delete_role_handler),
        )
        .route(
            "/api/roles/{role_id}/permissions",
            get(handlers::assignments::role_permissions_handler)
                .put(handlers::assignments::save_role_permissions_handler),
        )
        .route(
            "/api/permissions",
            get(handlers::catalog::list_permissions_handler)
                .post(handlers::catalog::create_permission_handler),
        )
        .route(
            "/api/permissions/{permission_id}",
            put(handlers::catalog::update_permission_handler)
                .delete(handlers::catalog::delete_permission_handler),
        )
        .route("/api/users", get(handlers::assignments::list_users_handler))
        .route(
            "/api/users/{user_id}/roles",
            get(handlers::assignments::user_roles_handler)
                .put(handlers::assignments::save_user_roles_handler),
        )
        .route(
            "/api/audit-logs",
            get(handlers::audit::list_audit_logs_handler),
        )
        .route_layer(from_fn(middleware::require_identity));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
