//! # Service Credential Client
use crate::credential_actor::CredentialError;
use crate::model::{CredentialCreate, CredentialUpdate, ResourceId, ServiceCredential};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the ServiceCredential actor.
#[derive(Clone)]
pub struct CredentialClient {
    inner: ResourceClient<ServiceCredential>,
}

impl CredentialClient {
    pub fn new(inner: ResourceClient<ServiceCredential>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_credential(
        &self,
        params: CredentialCreate,
    ) -> Result<ResourceId, CredentialError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_credential(
        &self,
        id: ResourceId,
        update: CredentialUpdate,
    ) -> Result<ServiceCredential, CredentialError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<ServiceCredential> for CredentialClient {
    type Error = CredentialError;

    fn inner(&self) -> &ResourceClient<ServiceCredential> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CredentialError::NotFound(id),
            other => other
                .downcast_entity::<CredentialError>()
                .unwrap_or_else(|e| CredentialError::ActorCommunicationError(e.to_string())),
        }
    }
}
