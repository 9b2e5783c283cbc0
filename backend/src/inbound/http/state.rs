//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Directory serving every `/users` route.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state around a directory implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserDirectory;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryUserDirectory::seeded()));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
