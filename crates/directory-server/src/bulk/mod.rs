//! # Bulk Operations
//!
//! Executes an ordered batch of create / update / delete operations against any registered
//! resource type. Later operations may refer to resources created earlier in the same
//! batch through `placeholder-ref:<bulkId>` references.
//!
//! - [`request`] / [`response`] - wire model of a batch and its per-operation results
//! - [`cross_ref`] - per-batch `bulkId` to id table
//! - [`placeholder`] - substitution of placeholder references
//! - [`dispatcher`] - uniform invocation of a [`ResourceHandler`](crate::handlers::ResourceHandler)
//! - [`orchestrator`] - the batch loop, preconditions, error budget and cancellation

pub mod cross_ref;
pub mod dispatcher;
pub mod orchestrator;
pub mod placeholder;
pub mod request;
pub mod response;

pub use cross_ref::CrossReferenceTable;
pub use dispatcher::{Dispatch, Effect, OperationDispatcher};
pub use orchestrator::{BulkError, BulkLimits, BulkOrchestrator, CallContext};
pub use placeholder::PLACEHOLDER_PREFIX;
pub use request::{BulkOperation, BulkRequest, Method, Verb};
pub use response::{BulkOperationResult, BulkResponse};
