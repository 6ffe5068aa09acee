//! # Service Credential Actor
//!
//! Owns the machine identities the token issuer authenticates. A credential may name an
//! owning user, which is checked against the user actor injected as context.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CredentialClient;
use crate::model::{ResourceId, ServiceCredential};
use resource_framework::ResourceActor;

/// Creates a new ServiceCredential actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ServiceCredential>, CredentialClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ResourceId::generate);
    (actor, CredentialClient::new(generic_client))
}
