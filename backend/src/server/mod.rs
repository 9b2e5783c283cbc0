//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
use crate::doc::ApiDoc;
use crate::inbound::http::routes::{configure_users, not_found};
use crate::inbound::http::state::HttpState;

/// Path serving the OpenAPI document as JSON.
pub const OPENAPI_JSON_PATH: &str = "/swagger-docs";
/// Swagger UI mount point; the bare path redirects here.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui/";
/// ReDoc mount point.
pub const REDOC_PATH: &str = "/redoc";

const SWAGGER_UI_BARE_PATH: &str = "/swagger-ui";

/// Per-worker dependencies shared by every [`App`] instance.
#[derive(Clone)]
pub struct AppDependencies {
    /// Directory handle for the users routes.
    pub http_state: web::Data<HttpState>,
    /// Generated document, present when documentation routes are enabled.
    pub openapi: Option<OpenApiDocument>,
}

impl AppDependencies {
    /// Bundle dependencies, generating the OpenAPI document when `docs_enabled`.
    pub fn new(http_state: HttpState, docs_enabled: bool) -> Self {
        Self {
            http_state: web::Data::new(http_state),
            openapi: docs_enabled.then(ApiDoc::openapi),
        }
    }
}

fn configure_docs(cfg: &mut web::ServiceConfig, openapi: OpenApiDocument) {
    cfg.service(web::redirect(SWAGGER_UI_BARE_PATH, SWAGGER_UI_PATH))
        .service(
            SwaggerUi::new(format!("{SWAGGER_UI_PATH}{{_:.*}}"))
                .url(OPENAPI_JSON_PATH, openapi.clone()),
        )
        .service(Redoc::with_url(REDOC_PATH, openapi));
}

/// Assemble the application: users routes, optional docs and the
/// `"not found"` fallback, all behind the [`Trace`] middleware.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        openapi,
    } = deps;

    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_users)
        .configure(|cfg| {
            if let Some(openapi) = openapi {
                configure_docs(cfg, openapi);
            }
        })
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server from a [`ServerConfig`].
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        directory,
        docs_enabled,
    } = config;
    let deps = AppDependencies::new(HttpState::new(directory), docs_enabled);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    if docs_enabled {
        info!(
            openapi = OPENAPI_JSON_PATH,
            swagger_ui = SWAGGER_UI_PATH,
            redoc = REDOC_PATH,
            "serving API documentation"
        );
    }
    Ok(server)
}
