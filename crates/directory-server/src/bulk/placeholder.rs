//! Substitution of `placeholder-ref:<bulkId>` references.

use super::cross_ref::CrossReferenceTable;
use crate::error::ScimError;
use crate::model::ResourceId;
use serde_json::Value;

/// Reserved prefix marking a string as a reference to an earlier create in the batch.
pub const PLACEHOLDER_PREFIX: &str = "placeholder-ref:";

/// Replaces every placeholder reference in `payload`, depth first, with the id recorded
/// for it. Fails on the first reference the table cannot resolve.
pub fn resolve_payload(payload: &mut Value, table: &CrossReferenceTable) -> Result<(), ScimError> {
    match payload {
        Value::String(s) => {
            if let Some(id) = resolve_reference(s, table)? {
                *s = id.to_string();
            }
        }
        Value::Array(items) => {
            for item in items {
                resolve_payload(item, table)?;
            }
        }
        Value::Object(map) => {
            for value in map.values_mut() {
                resolve_payload(value, table)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
    Ok(())
}

/// Resolves the identifier segment of a path, which may itself be a placeholder reference.
pub fn resolve_identifier(raw: &str, table: &CrossReferenceTable) -> Result<ResourceId, ScimError> {
    if let Some(id) = resolve_reference(raw, table)? {
        return Ok(id);
    }
    raw.parse()
        .map_err(|_| ScimError::invalid_value(format!("'{raw}' is not a valid resource id")))
}

/// `Ok(None)` for strings that are not references at all.
fn resolve_reference(
    s: &str,
    table: &CrossReferenceTable,
) -> Result<Option<ResourceId>, ScimError> {
    let Some(token) = s.strip_prefix(PLACEHOLDER_PREFIX) else {
        return Ok(None);
    };
    table.lookup(token).map(Some).ok_or_else(|| {
        ScimError::invalid_value(format!(
            "bulkId '{token}' does not refer to a resource created earlier in this batch"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_nested_references_are_replaced() {
        let user = ResourceId::generate();
        let mut table = CrossReferenceTable::new();
        table.record("A", user);

        let mut payload = json!({
            "displayName": "Admins",
            "members": [{ "value": "placeholder-ref:A", "display": "alice" }],
            "meta": { "owner": "placeholder-ref:A", "tags": ["placeholder-ref:A", 7, null] }
        });
        resolve_payload(&mut payload, &table).unwrap();

        let expected = user.to_string();
        assert_eq!(payload["members"][0]["value"], expected.as_str());
        assert_eq!(payload["meta"]["owner"], expected.as_str());
        assert_eq!(payload["meta"]["tags"], json!([expected, 7, null]));
        assert_eq!(payload["displayName"], "Admins");
    }

    #[test]
    fn test_unknown_token_is_invalid_value() {
        let mut payload = json!({ "ownerId": "placeholder-ref:ZZZ" });
        let err = resolve_payload(&mut payload, &CrossReferenceTable::new()).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::InvalidValue));
    }

    #[test]
    fn test_prefix_must_lead_the_string() {
        let mut payload = json!({ "note": "see placeholder-ref:A" });
        resolve_payload(&mut payload, &CrossReferenceTable::new()).unwrap();
        assert_eq!(payload["note"], "see placeholder-ref:A");
    }

    #[test]
    fn test_identifier_may_be_a_reference() {
        let id = ResourceId::generate();
        let mut table = CrossReferenceTable::new();
        table.record("A", id);

        assert_eq!(resolve_identifier("placeholder-ref:A", &table).unwrap(), id);
        assert_eq!(resolve_identifier(&id.to_string(), &table).unwrap(), id);
        assert_eq!(
            resolve_identifier("user_1", &table).unwrap_err().kind(),
            Some(ErrorKind::InvalidValue)
        );
    }
}
