//! [`ActorEntity`] implementation for [`CustomResource`].

use super::CustomResourceError;
use crate::model::{CustomResource, CustomResourceCreate, CustomResourceUpdate, ResourceId};
use async_trait::async_trait;
use resource_framework::ActorEntity;
use serde_json::{Map, Value};

const SERVER_OWNED: [&str; 3] = ["id", "resourceType", "meta"];

fn reject_server_owned(attributes: &Map<String, Value>) -> Result<(), CustomResourceError> {
    match SERVER_OWNED.iter().find(|name| attributes.contains_key(**name)) {
        Some(name) => Err(CustomResourceError::ReadOnlyAttribute(name.to_string())),
        None => Ok(()),
    }
}

#[async_trait]
impl ActorEntity for CustomResource {
    type Id = ResourceId;
    type Create = CustomResourceCreate;
    type Update = CustomResourceUpdate;
    type Context = ();
    type Error = CustomResourceError;

    fn from_create_params(
        id: ResourceId,
        params: CustomResourceCreate,
    ) -> Result<Self, Self::Error> {
        reject_server_owned(&params.attributes)?;
        if params.attributes.is_empty() {
            return Err(CustomResourceError::ValidationError(
                "at least one attribute is required".to_string(),
            ));
        }
        Ok(Self {
            id,
            resource_type: params.resource_type,
            attributes: params.attributes,
        })
    }

    async fn on_update(
        &mut self,
        update: CustomResourceUpdate,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        reject_server_owned(&update.attributes)?;
        for (name, value) in update.attributes {
            if value.is_null() {
                self.attributes.remove(&name);
            } else {
                self.attributes.insert(name, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_update_merges_and_null_removes() {
        let mut device = CustomResource::from_create_params(
            ResourceId::generate(),
            CustomResourceCreate {
                resource_type: "Device".to_string(),
                attributes: attributes(json!({"serial": "A-1", "location": "rack 4"})),
            },
        )
        .unwrap();

        device
            .on_update(
                CustomResourceUpdate {
                    attributes: attributes(json!({"location": null, "owner": "ops"})),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(
            Value::Object(device.attributes),
            json!({"serial": "A-1", "owner": "ops"})
        );
    }

    #[test]
    fn test_server_owned_attributes_are_rejected() {
        let result = CustomResource::from_create_params(
            ResourceId::generate(),
            CustomResourceCreate {
                resource_type: "Device".to_string(),
                attributes: attributes(json!({"id": "mine"})),
            },
        );
        assert_eq!(
            result.unwrap_err(),
            CustomResourceError::ReadOnlyAttribute("id".to_string())
        );
    }
}
