use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// Server-generated identifier shared by every directory resource.
///
/// Path identifiers must parse as a UUID; anything else is not a resource id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ResourceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The kind of resource a registry entry serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceType {
    User,
    Group,
    ServiceCredential,
    /// Operator-defined resource type served by a generic attribute store.
    Custom(String),
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::User => f.write_str("User"),
            ResourceType::Group => f.write_str("Group"),
            ResourceType::ServiceCredential => f.write_str("ServiceCredential"),
            ResourceType::Custom(name) => f.write_str(name),
        }
    }
}
