//! # System Lifecycle
//!
//! Starting, wiring and stopping the directory's resource actors.
//!
//! Actors are created without their dependencies and receive them at `run(context)`:
//! groups and service credentials get a [`UserClient`](crate::clients::UserClient) to
//! validate member and owner references. The dependency graph is acyclic, so dropping
//! every client is enough to stop every actor.
//!
//! ## Shutdown
//!
//! 1. Drop every client, including the ones held by the registry's handlers.
//! 2. Each actor sees its mailbox close and logs its final store size.
//! 3. Actors holding a `UserClient` release it as they stop, which lets the user actor
//!    stop last.
//!
//! Orchestrators share the registry, so they must be dropped before
//! [`DirectorySystem::shutdown`] is awaited. A live one makes shutdown return
//! [`ShutdownError::RegistryInUse`] instead of waiting forever.

pub mod directory_system;

pub use directory_system::*;
