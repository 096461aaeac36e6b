//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::CreateUserRequest;
use domain::{UserList, UserRecord};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserRecord,
            UserList,
        )
    ),
    tags(
        (name = "Users", description = "User profile endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/user"));
        assert!(paths.iter().any(|p| p.as_str() == "/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/users/{id}"));
    }
}
