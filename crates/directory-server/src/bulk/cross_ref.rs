use crate::model::ResourceId;
use std::collections::HashMap;

/// `bulkId` to server-generated id, for one batch execution.
///
/// Only successful creates are recorded, in execution order, so a reference to a later
/// operation never resolves.
#[derive(Debug, Default)]
pub struct CrossReferenceTable {
    ids: HashMap<String, ResourceId>,
}

impl CrossReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, bulk_id: impl Into<String>, id: ResourceId) {
        self.ids.insert(bulk_id.into(), id);
    }

    pub fn lookup(&self, bulk_id: &str) -> Option<ResourceId> {
        self.ids.get(bulk_id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
