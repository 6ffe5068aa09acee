//! # Batch Orchestrator
//!
//! Runs a [`BulkRequest`] against the [`ResourceRegistry`]:
//!
//! 1. Whole-batch preconditions (operation count, unique create `bulkId`s). A violation
//!    rejects the batch before anything is dispatched.
//! 2. Each operation, strictly in order: data and `bulkId` checks, placeholder
//!    substitution, path checks, registry lookup, identifier parsing, dispatch. Failures become a result entry and
//!    the batch goes on.
//! 3. After each failure the error budget is checked; once failures exceed it, the
//!    remaining operations are never attempted and do not appear in the response.
//!
//! Nothing is rolled back: each operation commits on its own.

use super::cross_ref::CrossReferenceTable;
use super::dispatcher::{Dispatch, Effect, OperationDispatcher};
use super::placeholder::{resolve_identifier, resolve_payload};
use super::request::{BulkOperation, BulkRequest, Verb};
use super::response::{BulkOperationResult, BulkResponse};
use crate::error::{ErrorKind, ScimError};
use crate::registry::ResourceRegistry;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Failures of the batch as a whole. Per-operation failures are reported inside the
/// [`BulkResponse`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BulkError {
    #[error("bulk request rejected: {0}")]
    Rejected(ScimError),

    #[error("bulk request was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkLimits {
    pub max_operations: usize,
    pub max_payload_bytes: usize,
}

impl Default for BulkLimits {
    fn default() -> Self {
        Self {
            max_operations: 1000,
            max_payload_bytes: 1_048_576,
        }
    }
}

/// Per-call context supplied by the (already authenticated) caller.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    principal: Option<String>,
    cancellation: CancellationToken,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn principal(&self) -> Option<&str> {
        self.principal.as_deref()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

/// Executes bulk requests. Cheap to clone; every clone shares the same registry.
#[derive(Debug, Clone)]
pub struct BulkOrchestrator {
    registry: Arc<ResourceRegistry>,
    limits: BulkLimits,
    base_url: Option<String>,
}

impl BulkOrchestrator {
    pub fn new(registry: Arc<ResourceRegistry>, limits: BulkLimits) -> Self {
        Self {
            registry,
            limits,
            base_url: None,
        }
    }

    /// Prefixes every `location` with `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    pub fn limits(&self) -> BulkLimits {
        self.limits
    }

    #[instrument(
        skip_all,
        fields(operations = request.operations.len(), principal = ctx.principal())
    )]
    pub async fn execute(
        &self,
        request: BulkRequest,
        ctx: &CallContext,
    ) -> Result<BulkResponse, BulkError> {
        self.check_preconditions(&request)
            .map_err(BulkError::Rejected)?;

        let budget = request.error_budget.unwrap_or(0);
        let mut table = CrossReferenceTable::new();
        let mut results = Vec::with_capacity(request.operations.len());
        let mut failures = 0u32;

        for (index, op) in request.operations.iter().enumerate() {
            if ctx.cancellation().is_cancelled() {
                warn!(index, attempted = results.len(), "Cancelled");
                return Err(BulkError::Cancelled);
            }

            match self.run_operation(op, &mut table).await {
                Ok((effect, location)) => {
                    info!(index, method = %op.method, path = %op.path, status = effect.status(), "Operation succeeded");
                    results.push(BulkOperationResult::success(op, effect.status(), location));
                }
                Err(e) => {
                    failures += 1;
                    warn!(index, method = %op.method, path = %op.path, status = e.status(), error = %e, "Operation failed");
                    results.push(BulkOperationResult::failure(op, &e));
                    if failures > budget {
                        info!(failures, budget, skipped = request.operations.len() - index - 1, "Error budget exhausted");
                        break;
                    }
                }
            }
        }

        info!(attempted = results.len(), failures, "Bulk request complete");
        Ok(BulkResponse {
            operations: results,
        })
    }

    fn check_preconditions(&self, request: &BulkRequest) -> Result<(), ScimError> {
        let count = request.operations.len();
        if count > self.limits.max_operations {
            return Err(ScimError::bad_request(
                ErrorKind::TooMany,
                format!(
                    "bulk request has {count} operations, the maximum is {}",
                    self.limits.max_operations
                ),
            ));
        }

        let mut seen = HashSet::new();
        let create_ids = request
            .operations
            .iter()
            .filter(|op| op.verb() == Verb::Create)
            .filter_map(|op| op.bulk_id.as_deref())
            .filter(|bulk_id| !bulk_id.is_empty());
        for bulk_id in create_ids {
            if !seen.insert(bulk_id) {
                return Err(ScimError::bad_request(
                    ErrorKind::Uniqueness,
                    format!("bulkId '{bulk_id}' is used by more than one create"),
                ));
            }
        }
        Ok(())
    }

    async fn run_operation(
        &self,
        op: &BulkOperation,
        table: &mut CrossReferenceTable,
    ) -> Result<(Effect, Option<String>), ScimError> {
        let mut payload = match (op.verb(), &op.data) {
            (Verb::Delete, _) => None,
            (_, Some(data)) => Some(data.clone()),
            (_, None) => {
                return Err(ScimError::invalid_syntax(format!(
                    "{} operation requires data",
                    op.method
                )))
            }
        };
        let bulk_id = match op.verb() {
            Verb::Create => match op.bulk_id.as_deref() {
                Some(bulk_id) if !bulk_id.is_empty() => Some(bulk_id),
                _ => {
                    return Err(ScimError::invalid_syntax(
                        "create operation requires a non-empty bulkId",
                    ))
                }
            },
            _ => None,
        };

        if let Some(payload) = payload.as_mut() {
            resolve_payload(payload, table)?;
        }

        let (segment, identifier) = split_path(&op.path)?;
        let entry = self.registry.resolve(segment)?;

        let dispatch = match (op.verb(), identifier, payload) {
            (Verb::Create, None, Some(payload)) => Dispatch::Create { payload },
            (Verb::Create, Some(_), _) => {
                return Err(ScimError::invalid_path(format!(
                    "create path '{}' must not name a resource",
                    op.path
                )))
            }
            (Verb::Update, Some(raw), Some(payload)) => Dispatch::Update {
                id: resolve_identifier(raw, table)?,
                payload,
            },
            (Verb::Delete, Some(raw), _) => Dispatch::Delete {
                id: resolve_identifier(raw, table)?,
            },
            (_, None, _) => {
                return Err(ScimError::invalid_value(format!(
                    "path '{}' must name a resource",
                    op.path
                )))
            }
            (_, Some(_), None) => {
                return Err(ScimError::invalid_syntax("operation requires data"))
            }
        };

        debug!(resource_type = %entry.resource_type, "Resolved handler");
        let effect = OperationDispatcher::invoke(entry.handler.as_ref(), dispatch).await?;

        if let (Effect::Created(id), Some(bulk_id)) = (effect, bulk_id) {
            table.record(bulk_id, id);
        }
        let location = match effect {
            Effect::Created(id) | Effect::Modified(id) => Some(self.location(segment, id)),
            Effect::Removed(_) => None,
        };
        Ok((effect, location))
    }

    fn location(&self, segment: &str, id: impl std::fmt::Display) -> String {
        match &self.base_url {
            Some(base) => format!("{base}/{segment}/{id}"),
            None => format!("{segment}/{id}"),
        }
    }
}

/// Splits `"/Users/<id>"` into `("Users", Some("<id>"))`. At most one identifier segment.
fn split_path(path: &str) -> Result<(&str, Option<&str>), ScimError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut parts = trimmed.split('/');
    let segment = parts.next().unwrap_or_default();
    let identifier = parts.next();
    if segment.is_empty() || identifier == Some("") || parts.next().is_some() {
        return Err(ScimError::invalid_path(format!(
            "'{path}' is not a resource path"
        )));
    }
    Ok((segment, identifier))
}
