//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::model::{ResourceId, User, UserCreate, UserUpdate};
use async_trait::async_trait;
use resource_framework::ActorEntity;

fn validate_user_name(user_name: &str) -> Result<(), UserError> {
    if user_name.trim().is_empty() {
        return Err(UserError::ValidationError(
            "userName is required and must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = ResourceId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: ResourceId, params: UserCreate) -> Result<Self, Self::Error> {
        validate_user_name(&params.user_name)?;
        Ok(Self {
            id,
            user_name: params.user_name,
            display_name: params.display_name,
            emails: params.emails,
            active: params.active.unwrap_or(true),
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(user_name) = update.user_name {
            validate_user_name(&user_name)?;
            self.user_name = user_name;
        }
        if let Some(display_name) = update.display_name {
            self.display_name = Some(display_name);
        }
        if let Some(emails) = update.emails {
            self.emails = emails;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }
}
