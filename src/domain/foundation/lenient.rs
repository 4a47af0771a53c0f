//! Field deserializers for form payloads.
//!
//! Form values arrive loosely typed. These helpers turn `null`, unknown
//! choices and wrongly typed values into defaults instead of rejecting the
//! whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` becomes `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A lowercase string enum read case-insensitively; anything else is `None`.
pub(crate) fn lenient_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => {
            serde_json::from_value(Value::String(raw.trim().to_lowercase())).ok()
        }
        _ => None,
    })
}

/// Like [`lenient_choice`], falling back to `T::default()`.
pub(crate) fn lenient_choice_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient_choice(deserializer)?.unwrap_or_default())
}

/// A small unsigned number given as a number or a numeric string.
/// Out-of-range or unparsable values are `None`.
pub(crate) fn lenient_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    })
}
