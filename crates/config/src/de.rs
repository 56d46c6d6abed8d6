//! Lenient deserialization helpers for hand-written YAML.

use serde::Deserialize;
use serde::de::Deserializer;

/// Deserializes a YAML `null` (for example `github:` with no body) as the
/// type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
