use serde::{Deserialize, Deserializer};

/// One candidate definition as returned by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefinitionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub example: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_up: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbs_down: u64,
}

/// Decoded response for one query, in the service's ranking order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupResult {
    #[serde(rename = "list", deserialize_with = "null_as_default")]
    pub records: Vec<DefinitionRecord>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
