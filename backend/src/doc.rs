//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the `/users` CRUD endpoints
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`UserSchema`]) plus the [`UserPayload`] request body, so domain types
//!   stay free of utoipa
//!
//! The generated document is served at `/swagger-docs`, rendered by Swagger UI
//! and ReDoc, and exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserPayload;
use utoipa::OpenApi;

/// OpenAPI document for the users API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "1.0",
        description = "User API"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::get_user_by_email,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(UserSchema, UserPayload, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Operations on the user directory")
    )
)]
pub struct ApiDoc;
