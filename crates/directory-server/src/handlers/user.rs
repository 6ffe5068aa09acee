//! [`ResourceHandler`] for users.

use super::{parse_payload, HandlerError, ResourceHandler};
use crate::clients::UserClient;
use crate::error::ScimError;
use crate::model::{ResourceId, User, UserCreate, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_framework::ActorClient;
use serde_json::Value;

impl From<UserError> for HandlerError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(id) => ScimError::NotFound(id).into(),
            UserError::ValidationError(detail) => ScimError::invalid_value(detail).into(),
            other @ UserError::ActorCommunicationError(_) => HandlerError::other(other),
        }
    }
}

#[async_trait]
impl ResourceHandler for UserClient {
    async fn create(&self, payload: Value) -> Result<ResourceId, HandlerError> {
        let params: UserCreate = parse_payload(payload)?;
        Ok(self.create_user(params).await?)
    }

    async fn update(&self, id: ResourceId, payload: Value) -> Result<bool, HandlerError> {
        let update: UserUpdate = parse_payload(payload)?;
        match self.update_user(id, update).await {
            Ok(_) => Ok(true),
            Err(UserError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: ResourceId) -> Result<bool, HandlerError> {
        match <Self as ActorClient<User>>::delete(self, id).await {
            Ok(()) => Ok(true),
            Err(UserError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use resource_framework::mock::MockClient;
    use resource_framework::FrameworkError;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_of_missing_user_is_not_effected() {
        let mut mock = MockClient::<User>::new();
        let id = ResourceId::generate();
        mock.expect_update(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        let handler = UserClient::new(mock.client());
        let effected = handler
            .update(id, json!({ "displayName": "Alice" }))
            .await
            .unwrap();

        assert!(!effected);
        mock.verify();
    }

    #[tokio::test]
    async fn test_validation_error_becomes_invalid_value() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            UserError::ValidationError("userName is required".to_string()),
        )));

        let handler = UserClient::new(mock.client());
        match handler.create(json!({})).await {
            Err(HandlerError::Domain(e)) => {
                assert_eq!(e.kind(), Some(ErrorKind::InvalidValue));
            }
            other => panic!("expected domain error, got {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_unclassified() {
        let mut mock = MockClient::<User>::new();
        let id = ResourceId::generate();
        mock.expect_delete(id).return_err(FrameworkError::ActorClosed);

        let handler = UserClient::new(mock.client());
        assert!(matches!(
            ResourceHandler::delete(&handler, id).await,
            Err(HandlerError::Other(_))
        ));
        mock.verify();
    }
}
