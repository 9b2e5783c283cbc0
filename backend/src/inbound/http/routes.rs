//! Route table for the users API.
//!
//! Shared by the server bootstrap and tests so both see the same handlers,
//! the same body decoding rules, and the same fallback for unknown paths.

use actix_web::{HttpResponse, web};

use crate::inbound::http::users::{
    create_user, delete_user, get_user, get_user_by_email, list_users, update_user,
};
use crate::inbound::http::validation::json_error_handler;

/// Body returned for unmatched routes.
pub const NOT_FOUND_BODY: &str = "not found";

/// Register the `/users` handlers and their JSON decoding rules.
///
/// Bodies are decoded as JSON regardless of `Content-Type`, matching the
/// API's JSON-only contract; decode failures become 400 responses.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use users_api::inbound::http::routes::{configure_users, not_found};
/// use users_api::inbound::http::state::HttpState;
/// use users_api::outbound::memory::InMemoryUserDirectory;
///
/// let state = HttpState::new(Arc::new(InMemoryUserDirectory::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_users)
///     .default_service(web::to(not_found));
/// ```
pub fn configure_users(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .service(list_users)
    .service(get_user_by_email)
    .service(get_user)
    .service(create_user)
    .service(update_user)
    .service(delete_user);
}

/// Fallback handler for unmatched routes: 404 with the JSON string `"not found"`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(NOT_FOUND_BODY)
}
