//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! GET    /users/email/{email}
//! POST   /users        {"name":"Alice","email":"alice@example.com"}
//! PATCH  /users/{id}   {"name":"Alice","email":"alice@example.com"}
//! DELETE /users/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::ports::UserDirectoryError;
use crate::domain::{Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// Request body for `POST /users` and `PATCH /users/{id}`.
///
/// Example JSON:
/// `{"name":"Alice","email":"alice@example.com"}`
///
/// Clients that echo a full record may include `id`; it is accepted and
/// ignored, since ids are assigned by the directory.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserPayload {
    /// Display name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Ignored; present only so full records decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl From<UserPayload> for NewUser {
    fn from(value: UserPayload) -> Self {
        NewUser::new(value.name, value.email)
    }
}

/// Translate directory failures into HTTP-facing domain errors.
pub(crate) fn map_directory_error(error: UserDirectoryError) -> Error {
    match error {
        UserDirectoryError::NotFound { lookup } => {
            Error::not_found(format!("user not found: {lookup}"))
        }
        UserDirectoryError::Unavailable { message } => {
            error!(%message, "user directory failed");
            Error::internal(format!("user directory unavailable: {message}"))
        }
    }
}

/// List every user in insertion order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(map_directory_error)?;
    Ok(web::Json(users))
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    let user = state.users.find_by_id(id).await.map_err(map_directory_error)?;
    Ok(web::Json(user))
}

/// Fetch the first user registered with an email address.
///
/// Emails are not unique; when several users share one, the earliest created
/// is returned. Matching is exact and case-sensitive.
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "No user has this email", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserByEmail"
)]
#[get("/users/email/{email}")]
pub async fn get_user_by_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let email = path.into_inner();
    let user = state
        .users
        .find_by_email(&email)
        .await
        .map_err(map_directory_error)?;
    Ok(web::Json(user))
}

/// Create a user; the directory assigns the id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (
            status = 201,
            description = "User created",
            body = UserSchema,
            headers(("Location" = String, description = "Path of the new user"))
        ),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users
        .create(payload.into_inner().into())
        .await
        .map_err(map_directory_error)?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id())))
        .json(user))
}

/// Overwrite a user's name and email. The id never changes.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    state
        .users
        .update(id, payload.into_inner().into())
        .await
        .map_err(map_directory_error)?;
    info!(user_id = %id, "user updated");
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner(), ID_FIELD)?;
    state.users.delete(id).await.map_err(map_directory_error)?;
    info!(user_id = %id, "user deleted");
    Ok(HttpResponse::NoContent().finish())
}
