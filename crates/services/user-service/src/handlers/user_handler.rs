//! User handlers.
//!
//! Responses only carry the user's `id`; `full_name` is accepted on input
//! but never echoed back.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{UserKey, UserPayload, UserResponse};

use crate::extractors::JsonBody;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Body is not valid JSON")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.create(payload.full_name).await?;
    tracing::debug!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.users.get(UserKey::from(id)).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Replace a user's full name
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Malformed user ID or body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .users
        .update(UserKey::from(id), payload.full_name)
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let key = UserKey::from(id);
    state.users.delete(key.clone()).await?;
    tracing::debug!(id = %key, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mockall::predicate::eq;
    use tower::ServiceExt;

    use common::AppError;
    use domain::User;

    use crate::repository::MockUserRepository;
    use crate::routes::create_router;
    use crate::state::AppState;

    fn app(repo: MockUserRepository) -> axum::Router {
        create_router(AppState::new(Arc::new(repo)))
    }

    #[tokio::test]
    async fn test_path_id_is_passed_through_as_raw_key() {
        let mut repo = MockUserRepository::new();
        repo.expect_get()
            .with(eq(domain::UserKey::Raw("5".to_string())))
            .returning(|_| Ok(User::new(5, "Ada")));

        let response = app(repo)
            .oneshot(Request::get("/users/5").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_repository_not_found_maps_to_404() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .returning(|_, _| Err(AppError::NotFound));

        let request = Request::put("/users/9")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"full_name": "X"}"#))
            .unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_repository_failure_maps_to_500() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| {
                Err(AppError::Database(sea_orm::DbErr::Custom(
                    "store offline".to_string(),
                )))
            });

        let response = app(repo)
            .oneshot(Request::get("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_json_never_reaches_repository() {
        let repo = MockUserRepository::new();

        let request = Request::post("/users")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
