use super::ResourceId;
use serde::{Deserialize, Serialize};

/// A named set of users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: ResourceId,
    pub display_name: String,
    pub members: Vec<Member>,
}

/// Reference to a member user. `value` is the user's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub value: ResourceId,
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreate {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// `members`, when present, replaces the whole member list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    pub display_name: Option<String>,
    pub members: Option<Vec<Member>>,
}
