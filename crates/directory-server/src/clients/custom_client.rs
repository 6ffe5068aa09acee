//! # Custom Resource Client
use crate::custom_actor::CustomResourceError;
use crate::model::{CustomResource, CustomResourceCreate, CustomResourceUpdate, ResourceId};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Client for one custom resource type's actor.
#[derive(Clone)]
pub struct CustomResourceClient {
    resource_type: String,
    inner: ResourceClient<CustomResource>,
}

impl CustomResourceClient {
    pub fn new(resource_type: String, inner: ResourceClient<CustomResource>) -> Self {
        Self {
            resource_type,
            inner,
        }
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    #[instrument(skip(self), fields(resource_type = %self.resource_type))]
    pub async fn create_resource(
        &self,
        attributes: Map<String, Value>,
    ) -> Result<ResourceId, CustomResourceError> {
        debug!("Sending request");
        let params = CustomResourceCreate {
            resource_type: self.resource_type.clone(),
            attributes,
        };
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(resource_type = %self.resource_type))]
    pub async fn update_resource(
        &self,
        id: ResourceId,
        attributes: Map<String, Value>,
    ) -> Result<CustomResource, CustomResourceError> {
        debug!("Sending request");
        self.inner
            .update(id, CustomResourceUpdate { attributes })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CustomResource> for CustomResourceClient {
    type Error = CustomResourceError;

    fn inner(&self) -> &ResourceClient<CustomResource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomResourceError::NotFound(id),
            other => other
                .downcast_entity::<CustomResourceError>()
                .unwrap_or_else(|e| CustomResourceError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::{create_mock_client, expect_create};
    use serde_json::json;

    #[tokio::test]
    async fn test_create_tags_payload_with_resource_type() {
        let (client, mut receiver) = create_mock_client::<CustomResource>(4);
        let devices = CustomResourceClient::new("Device".to_string(), client);

        let id = ResourceId::generate();
        let create_task = tokio::spawn(async move {
            let mut attributes = Map::new();
            attributes.insert("serial".to_string(), json!("A-1"));
            devices.create_resource(attributes).await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.resource_type, "Device");
        assert_eq!(params.attributes["serial"], "A-1");
        responder.send(Ok(id)).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(id));
    }
}
