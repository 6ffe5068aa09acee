//! Outbound batch model. Absent optional fields are omitted from the JSON.

use super::request::{BulkOperation, Method};
use crate::error::{ErrorResponse, ScimError};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkResponse {
    #[serde(rename = "Operations")]
    pub operations: Vec<BulkOperationResult>,
}

impl BulkResponse {
    pub fn failures(&self) -> usize {
        self.operations.iter().filter(|r| !r.is_success()).count()
    }
}

/// Outcome of one attempted operation. `method`, `path`, `bulkId` and `version` are
/// echoed from the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperationResult {
    pub method: Method,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<ErrorResponse>,
}

impl BulkOperationResult {
    pub fn success(op: &BulkOperation, status: u16, location: Option<String>) -> Self {
        Self {
            method: op.method.clone(),
            path: op.path.clone(),
            bulk_id: op.bulk_id.clone(),
            version: op.version.clone(),
            location,
            status,
            response: None,
        }
    }

    pub fn failure(op: &BulkOperation, error: &ScimError) -> Self {
        Self {
            method: op.method.clone(),
            path: op.path.clone(),
            bulk_id: op.bulk_id.clone(),
            version: op.version.clone(),
            location: None,
            status: error.status(),
            response: Some(error.to_response()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.response.is_none()
    }
}
