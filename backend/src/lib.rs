//! Users API library: an in-memory user directory served over HTTP with
//! OpenAPI documentation.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI, ReDoc and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
