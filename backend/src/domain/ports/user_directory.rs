//! Port for the user directory: the authoritative set of user records.
//!
//! Absence is an ordinary outcome reported as [`UserDirectoryError::NotFound`];
//! only [`UserDirectoryError::Unavailable`] signals a fault in the adapter.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Failures reported by user directory adapters.
    pub enum UserDirectoryError {
        /// No record matches the lookup key.
        NotFound { lookup: String } => "user not found: {lookup}",
        /// The directory could not serve the request.
        Unavailable { message: String } => "user directory unavailable: {message}",
    }
}

impl UserDirectoryError {
    /// `NotFound` for an identifier lookup.
    pub fn missing_id(id: UserId) -> Self {
        Self::not_found(format!("id {id}"))
    }

    /// `NotFound` for an email lookup.
    pub fn missing_email(email: &str) -> Self {
        Self::not_found(format!("email {email}"))
    }
}

/// Directory of user records.
///
/// Implementations must keep ids unique, allocate them monotonically without
/// reuse, and preserve insertion order for [`UserDirectory::list`] and
/// [`UserDirectory::find_by_email`].
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Snapshot of every record in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Record with the given id.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserDirectoryError>;

    /// Earliest-inserted record whose email equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> Result<User, UserDirectoryError>;

    /// Allocate a fresh id, append the record, and return it.
    async fn create(&self, details: NewUser) -> Result<User, UserDirectoryError>;

    /// Overwrite `name` and `email` of an existing record, keeping its id.
    async fn update(&self, id: UserId, details: NewUser) -> Result<User, UserDirectoryError>;

    /// Remove the record with the given id.
    async fn delete(&self, id: UserId) -> Result<(), UserDirectoryError>;
}
