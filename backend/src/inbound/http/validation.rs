//! Decode-time validation for inbound HTTP requests.
//!
//! Path segments and JSON bodies are checked here before any handler reaches
//! the directory, so malformed input always surfaces as a 400 with structured
//! details instead of a server fault.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidInteger.as_str(),
    }))
}

/// Parse a path segment as a [`UserId`], reporting failures as 400s.
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .parse::<UserId>()
        .map_err(|err| invalid_integer_error(field, err.value()))
}

fn body_error(payload: &JsonPayloadError) -> Error {
    match payload {
        JsonPayloadError::Deserialize(source) => Error::invalid_request(format!(
            "request body does not match the expected schema: {source}"
        ))
        .with_details(json!({
            "code": ErrorCode::InvalidBody.as_str(),
            "line": source.line(),
            "column": source.column(),
        })),
        other => Error::invalid_request(format!("malformed request body: {other}")).with_details(
            json!({
                "code": ErrorCode::InvalidBody.as_str(),
            }),
        ),
    }
}

/// `JsonConfig` error handler turning body decode failures into domain errors.
pub(crate) fn json_error_handler(payload: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %payload, path = req.path(), "rejecting malformed JSON body");
    body_error(&payload).into()
}
