//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::UserDirectory;
use crate::inbound::http::routes::{configure_users, not_found};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserDirectory;

/// Build an app serving the users routes over `directory`.
///
/// - Wraps requests in [`Trace`] so error payloads carry a trace id.
/// - Installs the `"not found"` fallback for unmatched paths.
pub fn users_app(
    directory: Arc<dyn UserDirectory>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(directory)))
        .wrap(Trace)
        .configure(configure_users)
        .default_service(web::to(not_found))
}

/// Users app over a directory holding the three sample users.
pub fn seeded_users_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    users_app(Arc::new(InMemoryUserDirectory::seeded()))
}
