//! Serde helpers for documents where `null` stands for "empty".

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field is tolerated too.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
