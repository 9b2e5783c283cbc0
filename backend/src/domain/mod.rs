//! Domain primitives and ports.
//!
//! Purpose: define the user record, the transport-agnostic error payload, and
//! the directory port that inbound adapters call into.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: error payload and stable error identifier.
//! - `User` / `UserId` / `NewUser`: the directory's record type.
//! - `TraceId`: request-scoped correlation identifier.
//! - `ports::UserDirectory`: the directory port.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId, UserIdParseError};

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
