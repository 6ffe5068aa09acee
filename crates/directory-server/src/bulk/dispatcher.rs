//! Uniform invocation of a [`ResourceHandler`].

use crate::error::ScimError;
use crate::handlers::{HandlerError, ResourceHandler};
use crate::model::ResourceId;
use serde_json::Value;
use tracing::{debug, warn};

/// A fully resolved call: placeholders substituted, identifier parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Create { payload: Value },
    Update { id: ResourceId, payload: Value },
    Delete { id: ResourceId },
}

/// What a successful dispatch achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Created(ResourceId),
    Modified(ResourceId),
    Removed(ResourceId),
}

impl Effect {
    /// 201 for creates, 204 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            Effect::Created(_) => 201,
            Effect::Modified(_) | Effect::Removed(_) => 204,
        }
    }

    pub fn id(&self) -> ResourceId {
        match self {
            Effect::Created(id) | Effect::Modified(id) | Effect::Removed(id) => *id,
        }
    }
}

impl From<HandlerError> for ScimError {
    fn from(e: HandlerError) -> Self {
        match e {
            HandlerError::Domain(e) => e,
            HandlerError::Other(e) => {
                warn!(error = %e, "Unclassified handler failure");
                ScimError::internal(e.to_string())
            }
        }
    }
}

pub struct OperationDispatcher;

impl OperationDispatcher {
    /// Calls the verb's method on `handler`. An update or delete that ran but affected
    /// nothing is an expectation failure, not a success.
    pub async fn invoke(
        handler: &dyn ResourceHandler,
        dispatch: Dispatch,
    ) -> Result<Effect, ScimError> {
        debug!(?dispatch, "Dispatching");
        match dispatch {
            Dispatch::Create { payload } => Ok(Effect::Created(handler.create(payload).await?)),
            Dispatch::Update { id, payload } => {
                if handler.update(id, payload).await? {
                    Ok(Effect::Modified(id))
                } else {
                    Err(ScimError::ExpectationFailed(format!(
                        "resource {id} was not modified"
                    )))
                }
            }
            Dispatch::Delete { id } => {
                if handler.delete(id).await? {
                    Ok(Effect::Removed(id))
                } else {
                    Err(ScimError::ExpectationFailed(format!(
                        "resource {id} was not deleted"
                    )))
                }
            }
        }
    }
}
