//! # Directory Server
//!
//! Directory resources (users, groups, service credentials and operator-defined custom
//! resources) served by resource actors, and a bulk endpoint that runs ordered batches of
//! create / update / delete operations across all of them.
//!
//! - [`model`] - resources and their payload DTOs
//! - [`user_actor`], [`group_actor`], [`credential_actor`], [`custom_actor`] - one actor per resource type
//! - [`clients`] - typed clients for those actors
//! - [`handlers`] - the [`ResourceHandler`](handlers::ResourceHandler) capability every client implements
//! - [`registry`] - path segment to handler routing
//! - [`bulk`] - the batch orchestrator
//! - [`lifecycle`] - [`DirectorySystem`](lifecycle::DirectorySystem), which starts and stops everything

pub mod bulk;
pub mod clients;
pub mod config;
pub mod credential_actor;
pub mod custom_actor;
pub mod error;
pub mod group_actor;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod user_actor;
