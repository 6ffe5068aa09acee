//! # Resource Handlers
//!
//! [`ResourceHandler`] is the uniform capability the bulk orchestrator dispatches to. Every
//! resource client implements it explicitly: JSON payloads are parsed into the resource's
//! DTO here, and the resource's typed error is classified into a [`HandlerError`].
//!
//! Update and delete report whether anything was affected. A missing resource is
//! `Ok(false)`, not an error; turning that into a failure is the dispatcher's call.

pub mod credential;
pub mod custom;
pub mod group;
pub mod user;

use crate::error::ScimError;
use crate::model::ResourceId;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;

/// Create / update / delete over one resource type.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// Creates a resource and returns its server-generated id.
    async fn create(&self, payload: Value) -> Result<ResourceId, HandlerError>;

    /// Applies `payload` to the resource. `Ok(false)` when no resource was modified.
    async fn update(&self, id: ResourceId, payload: Value) -> Result<bool, HandlerError>;

    /// Removes the resource. `Ok(false)` when nothing was deleted.
    async fn delete(&self, id: ResourceId) -> Result<bool, HandlerError>;
}

/// Failure raised by a [`ResourceHandler`].
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// A recognized domain error whose status and kind are reported as-is.
    #[error(transparent)]
    Domain(#[from] ScimError),

    /// Anything else, reported as an internal error.
    #[error("{0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl HandlerError {
    pub fn other(e: impl Error + Send + Sync + 'static) -> Self {
        HandlerError::Other(Box::new(e))
    }
}

/// Deserializes a payload into a resource DTO; shape mismatches are invalid syntax.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, HandlerError> {
    serde_json::from_value(payload)
        .map_err(|e| HandlerError::Domain(ScimError::invalid_syntax(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::UserCreate;
    use serde_json::json;

    #[test]
    fn test_parse_payload_ignores_unknown_attributes() {
        let params: UserCreate = parse_payload(json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
            "userName": "alice"
        }))
        .unwrap();
        assert_eq!(params.user_name, "alice");
    }

    #[test]
    fn test_parse_payload_type_mismatch_is_invalid_syntax() {
        let result = parse_payload::<UserCreate>(json!({ "userName": 42 }));
        match result {
            Err(HandlerError::Domain(e)) => assert_eq!(e.kind(), Some(ErrorKind::InvalidSyntax)),
            other => panic!("expected invalid syntax, got {other:?}"),
        }
    }
}
