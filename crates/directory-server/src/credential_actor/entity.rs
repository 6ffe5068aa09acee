//! [`ActorEntity`] implementation for [`ServiceCredential`].

use super::CredentialError;
use crate::clients::UserClient;
use crate::model::{CredentialCreate, CredentialUpdate, ResourceId, ServiceCredential};
use async_trait::async_trait;
use resource_framework::{ActorClient, ActorEntity};

async fn validate_owner(owner: Option<ResourceId>, users: &UserClient) -> Result<(), CredentialError> {
    let Some(owner) = owner else {
        return Ok(());
    };
    match users.get(owner).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(CredentialError::UnknownOwner(owner)),
        Err(e) => Err(CredentialError::OwnerLookupFailed(e.to_string())),
    }
}

fn validate_name(name: &str) -> Result<(), CredentialError> {
    if name.trim().is_empty() {
        return Err(CredentialError::ValidationError(
            "name is required and must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for ServiceCredential {
    type Id = ResourceId;
    type Create = CredentialCreate;
    type Update = CredentialUpdate;
    type Context = UserClient;
    type Error = CredentialError;

    fn from_create_params(id: ResourceId, params: CredentialCreate) -> Result<Self, Self::Error> {
        if params.client_secret.is_some() {
            return Err(CredentialError::SensitiveAttribute("clientSecret"));
        }
        validate_name(&params.name)?;
        Ok(Self {
            client_id: format!("svc-{}", id.0.simple()),
            id,
            name: params.name,
            owner_id: params.owner_id,
            scopes: params.scopes,
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), Self::Error> {
        validate_owner(self.owner_id, users).await
    }

    async fn on_update(
        &mut self,
        update: CredentialUpdate,
        users: &UserClient,
    ) -> Result<(), Self::Error> {
        if update.client_secret.is_some() {
            return Err(CredentialError::SensitiveAttribute("clientSecret"));
        }
        if let Some(client_id) = update.client_id {
            if client_id != self.client_id {
                return Err(CredentialError::ImmutableAttribute("clientId"));
            }
        }
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(owner) = update.owner_id {
            validate_owner(Some(owner), users).await?;
            self.owner_id = Some(owner);
        }
        if let Some(scopes) = update.scopes {
            self.scopes = scopes;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_derives_from_resource_id() {
        let id = ResourceId::generate();
        let params = CredentialCreate {
            name: "billing-sync".to_string(),
            ..Default::default()
        };
        let credential = ServiceCredential::from_create_params(id, params).unwrap();
        assert_eq!(credential.client_id, format!("svc-{}", id.0.simple()));
    }

    #[test]
    fn test_supplied_secret_is_rejected() {
        let params = CredentialCreate {
            name: "billing-sync".to_string(),
            client_secret: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ServiceCredential::from_create_params(ResourceId::generate(), params),
            Err(CredentialError::SensitiveAttribute("clientSecret"))
        );
    }
}
