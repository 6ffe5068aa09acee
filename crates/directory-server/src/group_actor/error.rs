//! Error types for the Group actor.

use crate::model::ResourceId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GroupError {
    #[error("Group not found: {0}")]
    NotFound(String),

    #[error("Group validation error: {0}")]
    ValidationError(String),

    /// A member reference names a user that does not exist.
    #[error("Group member is not a known user: {0}")]
    UnknownMember(ResourceId),

    /// The user actor could not be asked about a member.
    #[error("Member lookup failed: {0}")]
    MemberLookupFailed(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
