//! # Group Actor
//!
//! Owns groups of users. Every member reference is checked against the user actor, which
//! is injected as the actor's context:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(32);
//! let (group_actor, group_client) = group_actor::new(32);
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(group_actor.run(user_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::GroupClient;
use crate::model::{Group, ResourceId};
use resource_framework::ResourceActor;

/// Creates a new Group actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Group>, GroupClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ResourceId::generate);
    (actor, GroupClient::new(generic_client))
}
