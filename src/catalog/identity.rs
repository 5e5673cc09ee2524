use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable identifier for an individual catalog entry.
///
/// Uniqueness across the catalog is enforced by the validator, not the
/// schema, so the newtype stays a plain transparent string wrapper.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(pub String);

/// Lifecycle status declared on a catalog entry.
///
/// Known variants keep serialization consistent with the schema enum;
/// `Other` preserves forward compatibility with catalogs that introduce new
/// statuses, so the renderer stays total even when schema validation was
/// skipped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServerStatus {
    Active,
    Experimental,
    Archived,
    Other(String),
}

impl ServerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ServerStatus::Active => "active",
            ServerStatus::Experimental => "experimental",
            ServerStatus::Archived => "archived",
            ServerStatus::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "active" => ServerStatus::Active,
            "experimental" => ServerStatus::Experimental,
            "archived" => ServerStatus::Archived,
            other => ServerStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for ServerStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}
