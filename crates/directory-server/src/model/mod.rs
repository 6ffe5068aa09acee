//! Directory resources and their create/update payloads.
//!
//! Payload DTOs deserialize from the camelCase JSON attributes of the directory protocol;
//! attributes they do not know (such as `schemas`) are ignored.

pub mod credential;
pub mod custom;
pub mod group;
pub mod id;
pub mod user;

pub use credential::*;
pub use custom::*;
pub use group::*;
pub use id::*;
pub use user::*;
