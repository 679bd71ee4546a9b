//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Repository backend in use (`memory` or `orm`)
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the repository backend is reachable.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Backend reachable", body = HealthResponse),
        (status = 503, description = "Backend unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let backend = state.users.kind().to_string();

    match state.users.ping().await {
        Ok(()) => {
            let response = HealthResponse {
                status: "healthy".to_string(),
                backend,
                error: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let response = HealthResponse {
                status: "unhealthy".to_string(),
                backend,
                error: Some(e.to_string()),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::repository::{MockUserRepository, RepositoryKind};
    use crate::routes::create_router;
    use common::AppError;

    #[tokio::test]
    async fn test_unreachable_backend_is_503() {
        let mut repo = MockUserRepository::new();
        repo.expect_kind().return_const(RepositoryKind::Orm);
        repo.expect_ping()
            .returning(|| {
                Err(AppError::Database(sea_orm::DbErr::Custom(
                    "connection refused".to_string(),
                )))
            });

        let app = create_router(AppState::new(Arc::new(repo)));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
