//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::health_handler::HealthResponse;
use domain::{UserPayload, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            UserPayload,
            UserResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_user_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_registers_domain_schemas() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        for name in ["UserPayload", "UserResponse", "HealthResponse"] {
            assert!(components.schemas.contains_key(name), "{} missing", name);
        }
    }
}
