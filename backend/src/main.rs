//! Users API entry-point: loads settings, builds the directory and serves
//! the REST endpoints with OpenAPI docs.

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::config::ServerSettings;
use users_api::domain::ports::UserDirectory;
use users_api::outbound::memory::InMemoryUserDirectory;
use users_api::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let seed_users = settings.seed_users();
    let directory: Arc<dyn UserDirectory> = if seed_users {
        Arc::new(InMemoryUserDirectory::seeded())
    } else {
        Arc::new(InMemoryUserDirectory::new())
    };
    info!(seeded = seed_users, "user directory initialised");

    let config = ServerConfig::new(bind_addr, directory).with_docs(settings.docs_enabled());
    create_server(config)?.await
}
