//! [`ActorEntity`] implementation for [`Group`].
//!
//! Members are validated in `on_create` and `on_update` by asking the injected
//! [`UserClient`] for each referenced user.

use super::GroupError;
use crate::clients::UserClient;
use crate::model::{Group, GroupCreate, GroupUpdate, Member, ResourceId};
use async_trait::async_trait;
use resource_framework::{ActorClient, ActorEntity};
use tracing::debug;

async fn validate_members(members: &[Member], users: &UserClient) -> Result<(), GroupError> {
    for member in members {
        debug!(member = %member.value, "Checking member");
        match users.get(member.value).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(GroupError::UnknownMember(member.value)),
            Err(e) => return Err(GroupError::MemberLookupFailed(e.to_string())),
        }
    }
    Ok(())
}

fn validate_display_name(display_name: &str) -> Result<(), GroupError> {
    if display_name.trim().is_empty() {
        return Err(GroupError::ValidationError(
            "displayName is required and must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Group {
    type Id = ResourceId;
    type Create = GroupCreate;
    type Update = GroupUpdate;
    type Context = UserClient;
    type Error = GroupError;

    fn from_create_params(id: ResourceId, params: GroupCreate) -> Result<Self, Self::Error> {
        validate_display_name(&params.display_name)?;
        Ok(Self {
            id,
            display_name: params.display_name,
            members: params.members,
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), Self::Error> {
        validate_members(&self.members, users).await
    }

    async fn on_update(
        &mut self,
        update: GroupUpdate,
        users: &UserClient,
    ) -> Result<(), Self::Error> {
        if let Some(display_name) = update.display_name {
            validate_display_name(&display_name)?;
            self.display_name = display_name;
        }
        if let Some(members) = update.members {
            validate_members(&members, users).await?;
            self.members = members;
        }
        Ok(())
    }
}
