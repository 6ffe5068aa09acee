//! [`ResourceHandler`] for custom resource types.

use super::{HandlerError, ResourceHandler};
use crate::clients::CustomResourceClient;
use crate::custom_actor::CustomResourceError;
use crate::error::{ErrorKind, ScimError};
use crate::model::{CustomResource, ResourceId};
use async_trait::async_trait;
use resource_framework::ActorClient;
use serde_json::{Map, Value};

fn into_attributes(payload: Value) -> Result<Map<String, Value>, HandlerError> {
    match payload {
        Value::Object(attributes) => Ok(attributes),
        other => Err(ScimError::invalid_syntax(format!(
            "custom resource payload must be a JSON object, got {other}"
        ))
        .into()),
    }
}

impl From<CustomResourceError> for HandlerError {
    fn from(e: CustomResourceError) -> Self {
        let detail = e.to_string();
        match e {
            CustomResourceError::NotFound(id) => ScimError::NotFound(id).into(),
            CustomResourceError::ValidationError(detail) => {
                ScimError::invalid_value(detail).into()
            }
            CustomResourceError::ReadOnlyAttribute(_) => {
                ScimError::bad_request(ErrorKind::Mutability, detail).into()
            }
            other => HandlerError::other(other),
        }
    }
}

#[async_trait]
impl ResourceHandler for CustomResourceClient {
    async fn create(&self, payload: Value) -> Result<ResourceId, HandlerError> {
        let attributes = into_attributes(payload)?;
        Ok(self.create_resource(attributes).await?)
    }

    async fn update(&self, id: ResourceId, payload: Value) -> Result<bool, HandlerError> {
        let attributes = into_attributes(payload)?;
        match self.update_resource(id, attributes).await {
            Ok(_) => Ok(true),
            Err(CustomResourceError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, HandlerError> {
        match <Self as ActorClient<CustomResource>>::delete(self, id).await {
            Ok(()) => Ok(true),
            Err(CustomResourceError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_framework::mock::MockClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_non_object_payload_is_rejected_before_the_actor() {
        let mock = MockClient::<CustomResource>::new();
        let handler = CustomResourceClient::new("Device".to_string(), mock.client());

        match handler.create(json!(["serial", "A-1"])).await {
            Err(HandlerError::Domain(e)) => assert_eq!(e.kind(), Some(ErrorKind::InvalidSyntax)),
            other => panic!("expected invalid syntax, got {other:?}"),
        }
        // no request reached the mock
        mock.verify();
    }
}
