//! # Group Client
use crate::group_actor::GroupError;
use crate::model::{Group, GroupCreate, GroupUpdate, ResourceId};
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Group actor.
#[derive(Clone)]
pub struct GroupClient {
    inner: ResourceClient<Group>,
}

impl GroupClient {
    pub fn new(inner: ResourceClient<Group>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_group(&self, params: GroupCreate) -> Result<ResourceId, GroupError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_group(
        &self,
        id: ResourceId,
        update: GroupUpdate,
    ) -> Result<Group, GroupError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Group> for GroupClient {
    type Error = GroupError;

    fn inner(&self) -> &ResourceClient<Group> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => GroupError::NotFound(id),
            other => other
                .downcast_entity::<GroupError>()
                .unwrap_or_else(|e| GroupError::ActorCommunicationError(e.to_string())),
        }
    }
}
