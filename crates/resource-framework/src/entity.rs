//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every directory resource (User, Group,
//! ServiceCredential, custom resources, …) implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the associated types for IDs, DTOs,
//! context and errors, and provides the lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`) the actor drives.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`; implement them only to add validation or side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Associated Types
/// A `User` entity requires a `UserCreate` payload; it cannot be sent a `GroupCreate`.
/// The compiler rejects such mixups, so the actor loop is written once for every
/// resource type.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is injected
/// into every hook when the actor is started with `run(context)`, which lets a
/// `Group` validate its members against the `User` actor without the two being
/// wired at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. a UUID newtype).
    ///
    /// Identifiers are produced by the id generator handed to
    /// [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per resource rather than one per message. Clients recover it
    /// from [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// If this returns an error the actor restores the entity to its state before
    /// the call, so partially applied changes are never observed.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
