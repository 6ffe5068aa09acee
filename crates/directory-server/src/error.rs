//! Protocol-level error model shared by handlers, the registry and the bulk orchestrator.
//!
//! A [`ScimError`] always knows its HTTP-equivalent status. Bad requests additionally carry
//! an [`ErrorKind`] (`scimType` on the wire). [`ErrorResponse`] is the serialized body placed
//! in a failed bulk operation result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema URN of error bodies.
pub const ERROR_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:Error";

/// Classification of a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[serde(rename = "invalidFilter")]
    InvalidFilter,
    #[serde(rename = "invalidPath")]
    InvalidPath,
    #[serde(rename = "invalidSyntax")]
    InvalidSyntax,
    #[serde(rename = "invalidValue")]
    InvalidValue,
    #[serde(rename = "invalidVers")]
    InvalidVersion,
    #[serde(rename = "mutability")]
    Mutability,
    #[serde(rename = "noTarget")]
    NoTarget,
    #[serde(rename = "sensitive")]
    Sensitive,
    #[serde(rename = "tooMany")]
    TooMany,
    #[serde(rename = "uniqueness")]
    Uniqueness,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFilter => "invalidFilter",
            ErrorKind::InvalidPath => "invalidPath",
            ErrorKind::InvalidSyntax => "invalidSyntax",
            ErrorKind::InvalidValue => "invalidValue",
            ErrorKind::InvalidVersion => "invalidVers",
            ErrorKind::Mutability => "mutability",
            ErrorKind::NoTarget => "noTarget",
            ErrorKind::Sensitive => "sensitive",
            ErrorKind::TooMany => "tooMany",
            ErrorKind::Uniqueness => "uniqueness",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported to the caller of a directory operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScimError {
    /// Domain validation failure (400).
    #[error("{kind}: {detail}")]
    BadRequest { kind: ErrorKind, detail: String },

    /// The addressed resource does not exist (404).
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The handler ran but reported no effect (417).
    #[error("{0}")]
    ExpectationFailed(String),

    /// Anything not classified above (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScimError {
    pub fn bad_request(kind: ErrorKind, detail: impl Into<String>) -> Self {
        ScimError::BadRequest {
            kind,
            detail: detail.into(),
        }
    }

    pub fn invalid_value(detail: impl Into<String>) -> Self {
        Self::bad_request(ErrorKind::InvalidValue, detail)
    }

    pub fn invalid_path(detail: impl Into<String>) -> Self {
        Self::bad_request(ErrorKind::InvalidPath, detail)
    }

    pub fn invalid_syntax(detail: impl Into<String>) -> Self {
        Self::bad_request(ErrorKind::InvalidSyntax, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ScimError::Internal(detail.into())
    }

    /// HTTP-equivalent status code.
    pub fn status(&self) -> u16 {
        match self {
            ScimError::BadRequest { .. } => 400,
            ScimError::NotFound(_) => 404,
            ScimError::ExpectationFailed(_) => 417,
            ScimError::Internal(_) => 500,
        }
    }

    /// The `scimType` of a bad request, `None` for every other status.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ScimError::BadRequest { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ScimError::BadRequest { detail, .. } => detail.clone(),
            other => other.to_string(),
        };
        ErrorResponse {
            schemas: vec![ERROR_SCHEMA.to_string()],
            status: self.status(),
            scim_type: self.kind(),
            detail,
        }
    }
}

/// Serialized error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub schemas: Vec<String>,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scim_type: Option<ErrorKind>,
    pub detail: String,
}
