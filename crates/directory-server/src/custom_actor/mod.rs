//! # Custom Resource Actor
//!
//! One actor per operator-defined resource type (e.g. `Devices`). Attributes are stored as
//! free-form JSON; only the server-owned attributes are protected.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomResourceClient;
use crate::model::{CustomResource, ResourceId};
use resource_framework::ResourceActor;

/// Creates a new actor for custom resources named `resource_type`, and its client.
pub fn new(
    resource_type: impl Into<String>,
    buffer_size: usize,
) -> (ResourceActor<CustomResource>, CustomResourceClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ResourceId::generate);
    (
        actor,
        CustomResourceClient::new(resource_type.into(), generic_client),
    )
}
