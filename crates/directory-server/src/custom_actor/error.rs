//! Error types for custom resource actors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource validation error: {0}")]
    ValidationError(String),

    #[error("Attribute '{0}' is assigned by the server")]
    ReadOnlyAttribute(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
