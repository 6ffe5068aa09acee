//! [`ResourceHandler`] for groups.

use super::{parse_payload, HandlerError, ResourceHandler};
use crate::clients::GroupClient;
use crate::error::{ErrorKind, ScimError};
use crate::group_actor::GroupError;
use crate::model::{Group, GroupCreate, GroupUpdate, ResourceId};
use async_trait::async_trait;
use resource_framework::ActorClient;
use serde_json::Value;

impl From<GroupError> for HandlerError {
    fn from(e: GroupError) -> Self {
        match e {
            GroupError::NotFound(id) => ScimError::NotFound(id).into(),
            GroupError::ValidationError(detail) => ScimError::invalid_value(detail).into(),
            GroupError::UnknownMember(id) => ScimError::bad_request(
                ErrorKind::NoTarget,
                format!("member {id} is not a known user"),
            )
            .into(),
            other => HandlerError::other(other),
        }
    }
}

#[async_trait]
impl ResourceHandler for GroupClient {
    async fn create(&self, payload: Value) -> Result<ResourceId, HandlerError> {
        let params: GroupCreate = parse_payload(payload)?;
        Ok(self.create_group(params).await?)
    }

    async fn update(&self, id: ResourceId, payload: Value) -> Result<bool, HandlerError> {
        let update: GroupUpdate = parse_payload(payload)?;
        match self.update_group(id, update).await {
            Ok(_) => Ok(true),
            Err(GroupError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, HandlerError> {
        match <Self as ActorClient<Group>>::delete(self, id).await {
            Ok(()) => Ok(true),
            Err(GroupError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
