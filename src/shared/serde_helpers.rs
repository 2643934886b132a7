//! Deserialization helpers for form-submitted JSON
//!
//! Forms submit every input, so blank inputs arrive as `""` rather than being
//! left out. These helpers normalise that before validation runs.

use serde::{Deserialize, Deserializer};

/// Deserialize a string, trimming surrounding whitespace (null becomes empty)
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| s.trim().to_string()).unwrap_or_default())
}

/// Deserialize an optional string, treating blank strings as absent
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
