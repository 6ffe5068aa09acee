use super::ResourceId;
use serde::{Deserialize, Serialize};

/// A directory user account.
///
/// # Actor Framework
/// Implements [`ActorEntity`](resource_framework::ActorEntity) in
/// [`user_actor::entity`](crate::user_actor::entity).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ResourceId,
    pub user_name: String,
    pub display_name: Option<String>,
    pub emails: Vec<Email>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub value: String,
    #[serde(default)]
    pub primary: bool,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[serde(default)]
    pub user_name: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub emails: Vec<Email>,
    pub active: Option<bool>,
}

/// Payload for updating an existing user; absent attributes are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub user_name: Option<String>,
    pub display_name: Option<String>,
    pub emails: Option<Vec<Email>>,
    pub active: Option<bool>,
}
