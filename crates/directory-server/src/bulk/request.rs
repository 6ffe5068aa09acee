//! Inbound batch model.

use crate::error::{ErrorKind, ScimError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The operation kind a [`Method`] maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Create,
    Update,
    Delete,
}

/// The method as the request spelled it. Echoed back unchanged in the result, so a
/// `PATCH` is reported as `PATCH` even though it runs as an update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Method {
    name: String,
    verb: Verb,
}

impl Method {
    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Method {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        let verb = match name.to_ascii_uppercase().as_str() {
            "POST" | "CREATE" => Verb::Create,
            "PUT" | "PATCH" | "UPDATE" => Verb::Update,
            "DELETE" => Verb::Delete,
            _ => return Err(format!("unknown method '{name}'")),
        };
        Ok(Self { name, verb })
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.name
    }
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        let name = match verb {
            Verb::Create => "POST",
            Verb::Update => "PUT",
            Verb::Delete => "DELETE",
        };
        Self {
            name: name.to_string(),
            verb,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A batch of operations, executed strictly in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkRequest {
    /// Failures tolerated before the batch halts. Absent means halt on the first failure.
    #[serde(
        rename = "failOnErrors",
        alias = "errorBudget",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_budget: Option<u32>,

    #[serde(rename = "Operations", alias = "operations", default)]
    pub operations: Vec<BulkOperation>,
}

impl BulkRequest {
    /// Parses a serialized batch, refusing bodies larger than `max_payload_bytes` before
    /// looking at them.
    pub fn from_slice(body: &[u8], max_payload_bytes: usize) -> Result<Self, ScimError> {
        if body.len() > max_payload_bytes {
            return Err(ScimError::bad_request(
                ErrorKind::TooMany,
                format!(
                    "bulk request of {} bytes exceeds the maximum of {max_payload_bytes}",
                    body.len()
                ),
            ));
        }
        serde_json::from_slice(body).map_err(|e| ScimError::invalid_syntax(e.to_string()))
    }
}

/// One operation of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkOperation {
    #[serde(rename = "method", alias = "verb")]
    pub method: Method,

    /// Required for creates; unique across the creates of a batch.
    #[serde(
        rename = "bulkId",
        alias = "placeholderId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bulk_id: Option<String>,

    /// `<segment>` for creates, `<segment>/<id>` for updates and deletes.
    pub path: String,

    #[serde(
        rename = "data",
        alias = "payload",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,

    /// Advisory; echoed back, never checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BulkOperation {
    pub fn verb(&self) -> Verb {
        self.method.verb()
    }

    pub fn create(bulk_id: impl Into<String>, path: impl Into<String>, data: Value) -> Self {
        Self {
            method: Verb::Create.into(),
            bulk_id: Some(bulk_id.into()),
            path: path.into(),
            data: Some(data),
            version: None,
        }
    }

    pub fn update(path: impl Into<String>, data: Value) -> Self {
        Self {
            method: Verb::Update.into(),
            bulk_id: None,
            path: path.into(),
            data: Some(data),
            version: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Verb::Delete.into(),
            bulk_id: None,
            path: path.into(),
            data: None,
            version: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_protocol_request_parses() {
        let body = json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:BulkRequest"],
            "failOnErrors": 1,
            "Operations": [
                { "method": "POST", "path": "/Users", "bulkId": "qwerty", "data": { "userName": "alice" } },
                { "method": "PATCH", "path": "/Users/b7c14771-226c-4d05-8860-134711653041", "version": "W/\"3\"", "data": {} },
                { "method": "DELETE", "path": "/Groups/e9e30dba-f08f-4109-8486-d5c6a331660a" }
            ]
        });
        let request: BulkRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.error_budget, Some(1));
        let verbs: Vec<Verb> = request.operations.iter().map(BulkOperation::verb).collect();
        assert_eq!(verbs, vec![Verb::Create, Verb::Update, Verb::Delete]);
        assert_eq!(request.operations[0].bulk_id.as_deref(), Some("qwerty"));
        assert_eq!(request.operations[1].version.as_deref(), Some("W/\"3\""));
        assert!(request.operations[2].data.is_none());
    }

    #[test]
    fn test_alternate_names_are_accepted() {
        let body = json!({
            "errorBudget": 2,
            "operations": [
                { "verb": "Create", "placeholderId": "A", "path": "Users", "payload": {} }
            ]
        });
        let request: BulkRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.error_budget, Some(2));
        let op = &request.operations[0];
        assert_eq!(op.verb(), Verb::Create);
        assert_eq!(op.method.as_str(), "Create");
        assert_eq!(op.bulk_id.as_deref(), Some("A"));
        assert_eq!(op.data, Some(json!({})));
    }

    #[test]
    fn test_method_keeps_its_spelling() {
        let op: BulkOperation =
            serde_json::from_value(json!({ "method": "PATCH", "path": "Users/x", "data": {} }))
                .unwrap();
        assert_eq!(op.verb(), Verb::Update);
        assert_eq!(serde_json::to_value(&op).unwrap()["method"], "PATCH");

        let lower: Method = serde_json::from_value(json!("delete")).unwrap();
        assert_eq!(lower.verb(), Verb::Delete);
        assert_eq!(lower.as_str(), "delete");
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let body = br#"{"Operations": [{ "method": "GET", "path": "Users" }]}"#;
        let err = BulkRequest::from_slice(body, 1024).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidSyntax));
        assert!(err.to_string().contains("unknown method 'GET'"));
    }

    #[test]
    fn test_oversized_body_is_too_many() {
        let body = br#"{"Operations": []}"#;
        let err = BulkRequest::from_slice(body, 4).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::TooMany));
        assert!(BulkRequest::from_slice(body, 1024).is_ok());
    }

    #[test]
    fn test_malformed_body_is_invalid_syntax() {
        let err = BulkRequest::from_slice(b"{ not json", 1024).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidSyntax));
    }
}
