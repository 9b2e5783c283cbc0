//! User record and its identifier.
//!
//! A [`User`] is the only record type held by the directory. The `id` is
//! assigned by the directory on creation and never changes afterwards; `name`
//! and `email` are free-form strings and are overwritten together by updates.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory-assigned user identifier.
///
/// Serialised as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Identifier that follows `self`, or `None` once the id space runs out.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when text does not parse as a [`UserId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("user id must be an integer, got {value:?}")]
pub struct UserIdParseError {
    value: String,
    #[source]
    source: ParseIntError,
}

impl UserIdParseError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl FromStr for UserId {
    type Err = UserIdParseError;

    /// Parse a decimal integer.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::UserId;
    ///
    /// let id: UserId = "42".parse().expect("integer id");
    /// assert_eq!(id.get(), 42);
    /// assert!("forty-two".parse::<UserId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self).map_err(|source| UserIdParseError {
            value: s.to_owned(),
            source,
        })
    }
}

/// Caller-supplied fields of a user, used by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Bundle a name and email. Neither is validated.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Requested display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// A user record held by the directory.
///
/// Wire shape: `{"id": 1, "name": "Alice", "email": "alice@example.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a record from an allocated id and caller-supplied fields.
    pub fn new(id: UserId, details: NewUser) -> Self {
        let NewUser { name, email } = details;
        Self { id, name, email }
    }

    /// Directory-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address, compared case-sensitively by lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Overwrite `name` and `email`; `id` is untouched.
    pub fn overwrite(&mut self, details: NewUser) {
        let NewUser { name, email } = details;
        self.name = name;
        self.email = email;
    }
}

#[cfg(test)]
mod tests;
