use serde::{Deserialize, Deserializer};

pub mod productos;

/// Deserialize a field that was present in the payload, even as `null`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` field this
/// yields `None` for a missing key, `Some(None)` for `null` and
/// `Some(Some(value))` otherwise.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
