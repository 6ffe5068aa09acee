//! [`ResourceHandler`] for service credentials.

use super::{parse_payload, HandlerError, ResourceHandler};
use crate::clients::CredentialClient;
use crate::credential_actor::CredentialError;
use crate::error::{ErrorKind, ScimError};
use crate::model::{CredentialCreate, CredentialUpdate, ResourceId, ServiceCredential};
use async_trait::async_trait;
use resource_framework::ActorClient;
use serde_json::Value;

impl From<CredentialError> for HandlerError {
    fn from(e: CredentialError) -> Self {
        let detail = e.to_string();
        match e {
            CredentialError::NotFound(id) => ScimError::NotFound(id).into(),
            CredentialError::ValidationError(detail) => ScimError::invalid_value(detail).into(),
            CredentialError::UnknownOwner(_) => {
                ScimError::bad_request(ErrorKind::NoTarget, detail).into()
            }
            CredentialError::ImmutableAttribute(_) => {
                ScimError::bad_request(ErrorKind::Mutability, detail).into()
            }
            CredentialError::SensitiveAttribute(_) => {
                ScimError::bad_request(ErrorKind::Sensitive, detail).into()
            }
            other => HandlerError::other(other),
        }
    }
}

#[async_trait]
impl ResourceHandler for CredentialClient {
    async fn create(&self, payload: Value) -> Result<ResourceId, HandlerError> {
        let params: CredentialCreate = parse_payload(payload)?;
        Ok(self.create_credential(params).await?)
    }

    async fn update(&self, id: ResourceId, payload: Value) -> Result<bool, HandlerError> {
        let update: CredentialUpdate = parse_payload(payload)?;
        match self.update_credential(id, update).await {
            Ok(_) => Ok(true),
            Err(CredentialError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, HandlerError> {
        match <Self as ActorClient<ServiceCredential>>::delete(self, id).await {
            Ok(()) => Ok(true),
            Err(CredentialError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::MockClient;
    use resource_framework::FrameworkError;
    use serde_json::json;

    #[tokio::test]
    async fn test_client_id_change_is_mutability_error() {
        let mut mock = MockClient::<ServiceCredential>::new();
        let id = ResourceId::generate();
        mock.expect_update(id)
            .return_err(FrameworkError::EntityError(Box::new(
                CredentialError::ImmutableAttribute("clientId"),
            )));

        let handler = CredentialClient::new(mock.client());
        match handler.update(id, json!({ "clientId": "svc-other" })).await {
            Err(HandlerError::Domain(e)) => {
                assert_eq!(e.status(), 400);
                assert_eq!(e.kind(), Some(ErrorKind::Mutability));
            }
            other => panic!("expected mutability error, got {other:?}"),
        }
        mock.verify();
    }

    #[test]
    fn test_secret_is_sensitive() {
        let err = HandlerError::from(CredentialError::SensitiveAttribute("clientSecret"));
        match err {
            HandlerError::Domain(e) => assert_eq!(e.kind(), Some(ErrorKind::Sensitive)),
            other => panic!("expected domain error, got {other:?}"),
        }
    }
}
