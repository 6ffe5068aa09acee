use super::ResourceId;
use serde::Serialize;
use serde_json::{Map, Value};

/// A resource of an operator-defined type, stored as free-form attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResource {
    pub id: ResourceId,
    pub resource_type: String,
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct CustomResourceCreate {
    pub resource_type: String,
    pub attributes: Map<String, Value>,
}

/// Attributes merged into the stored ones; a `null` value removes the attribute.
#[derive(Debug, Clone)]
pub struct CustomResourceUpdate {
    pub attributes: Map<String, Value>,
}
