//! User profile handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{UserFields, UserList, UserRecord};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "username cannot be empty"))]
    #[schema(example = "ferris")]
    pub username: String,
    #[validate(length(min = 1, message = "location cannot be empty"))]
    #[schema(example = "Berlin")]
    pub location: String,
    #[validate(length(min = 1, message = "skills cannot be empty"))]
    #[schema(example = "rust, sql")]
    pub skills: String,
    #[validate(length(min = 1, message = "interests cannot be empty"))]
    #[schema(example = "climbing")]
    pub interests: String,
}

impl From<CreateUserRequest> for UserFields {
    fn from(req: CreateUserRequest) -> Self {
        UserFields {
            username: req.username,
            location: req.location,
            skills: req.skills,
            interests: req.interests,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

/// Create a new user profile
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserRecord),
        (status = 422, description = "Malformed body or missing, mistyped or empty field")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserRecord>)> {
    let user = state.user_service.create_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// List user profiles (at most 1000)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Stored user profiles", body = UserList)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<UserList>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(UserList::from(users)))
}

/// Get user profile by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserRecord),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserRecord>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}
