//! # User Actor
//!
//! Owns the directory's user accounts. Users have no dependencies (`Context = ()`), so this
//! is the first actor started and the one groups and service credentials validate against.
//!
//! - [`entity`] - [`ActorEntity`](resource_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`]
//! - [`new()`] - creates the actor and its [`UserClient`]
//!
//! ```rust
//! use directory_server::user_actor;
//! use directory_server::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         user_name: "alice".to_string(),
//!         ..Default::default()
//!     };
//!     let id = client.create_user(params).await?;
//!     println!("created {id}");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::{ResourceId, User};
use resource_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ResourceId::generate);
    (actor, UserClient::new(generic_client))
}
