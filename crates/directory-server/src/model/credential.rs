use super::ResourceId;
use serde::{Deserialize, Serialize};

/// A machine identity used by the token issuer's client-credentials flow.
///
/// The `client_id` is derived from the resource id at creation and never changes.
/// Secrets are issued by the token service and are never stored or accepted here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCredential {
    pub id: ResourceId,
    pub name: String,
    pub client_id: String,
    pub owner_id: Option<ResourceId>,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialCreate {
    #[serde(default)]
    pub name: String,
    pub owner_id: Option<ResourceId>,
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(alias = "secret")]
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialUpdate {
    pub name: Option<String>,
    pub owner_id: Option<ResourceId>,
    pub scopes: Option<Vec<String>>,
    pub client_id: Option<String>,
    #[serde(alias = "secret")]
    pub client_secret: Option<String>,
}
