//! Error types for the ServiceCredential actor.

use crate::model::ResourceId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CredentialError {
    #[error("Credential not found: {0}")]
    NotFound(String),

    #[error("Credential validation error: {0}")]
    ValidationError(String),

    #[error("Credential owner is not a known user: {0}")]
    UnknownOwner(ResourceId),

    #[error("Attribute '{0}' is immutable")]
    ImmutableAttribute(&'static str),

    #[error("Attribute '{0}' cannot be written through this API")]
    SensitiveAttribute(&'static str),

    #[error("Owner lookup failed: {0}")]
    OwnerLookupFailed(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
