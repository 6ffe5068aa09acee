//! # Resource Registry
//!
//! Maps a path segment (`Users`, `Groups`, ...) to the resource type it serves and the
//! handler that serves it. Built once at startup through [`RegistryBuilder`]; after
//! [`RegistryBuilder::build`] it is never mutated, so concurrent batches share it through
//! an `Arc` without locking.

use crate::error::ScimError;
use crate::handlers::ResourceHandler;
use crate::model::ResourceType;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// A registered resource: its type and its handler.
#[derive(Clone)]
pub struct RegistryEntry {
    pub resource_type: ResourceType,
    pub handler: Arc<dyn ResourceHandler>,
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("resource_type", &self.resource_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("path segment '{0}' is already registered")]
    DuplicateSegment(String),

    #[error("path segment must be non-empty and must not contain '/': '{0}'")]
    InvalidSegment(String),
}

/// Read-only lookup table from path segment to [`RegistryEntry`].
#[derive(Debug)]
pub struct ResourceRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl ResourceRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up the entry serving `segment`. Unknown segments are an invalid-path error.
    pub fn resolve(&self, segment: &str) -> Result<&RegistryEntry, ScimError> {
        self.entries.get(segment).ok_or_else(|| {
            debug!(segment, "Unknown resource segment");
            ScimError::invalid_path(format!("no resource is registered at '{segment}'"))
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, RegistryEntry>,
}

impl RegistryBuilder {
    /// Registers `handler` at `segment`. Each segment may be registered once.
    pub fn register(
        mut self,
        segment: impl Into<String>,
        resource_type: ResourceType,
        handler: Arc<dyn ResourceHandler>,
    ) -> Result<Self, RegistryError> {
        let segment = segment.into();
        if segment.is_empty() || segment.contains('/') {
            return Err(RegistryError::InvalidSegment(segment));
        }
        if self.entries.contains_key(&segment) {
            return Err(RegistryError::DuplicateSegment(segment));
        }
        debug!(%segment, %resource_type, "Registering resource");
        self.entries.insert(
            segment,
            RegistryEntry {
                resource_type,
                handler,
            },
        );
        Ok(self)
    }

    pub fn build(self) -> ResourceRegistry {
        ResourceRegistry {
            entries: self.entries,
        }
    }
}
