//! # Resource Framework
//!
//! Building blocks for type-safe, concurrent resource services: a
//! **Resource-Oriented Architecture** (uniform Create / Get / Update / Delete on
//! well-defined resources) running on the **Actor Model** (one Tokio task per
//! resource type, isolated state, message passing).
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource's data and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - mailbox processing and the in-memory store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async handles
//!
//! Business rules are written once per resource in the entity; the framework provides
//! message passing, id generation, error propagation and state management.
//!
//! ## Context Injection
//!
//! Dependencies are injected when an actor is started (`actor.run(context)`), not when it
//! is constructed. A `Group` actor can therefore be given a `User` client after both
//! actors exist, and the wiring stays acyclic.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Different actors run in **parallel**
//! - No shared mutable state between actors
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient), a scripted stand-in for
//! any actor, so dependent code can be tested without spawning real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod telemetry;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
