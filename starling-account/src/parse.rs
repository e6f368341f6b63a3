//! Shared decoding steps for the provider's response bodies.

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::{Map, Value};

use crate::DecodeError;

/// Decode a response body into `T`.
/// Bodies carrying the provider's `{"error": ..., "error_description": ...}`
/// envelope are reported as [`DecodeError::Provider`] rather than decoded.
/// A `null` body decodes as an empty object.
pub(crate) fn decode_body<T: DeserializeOwned>(
    body: &str,
    shape: &'static str,
) -> Result<T, DecodeError> {
    let value = match serde_json::from_str(body).map_err(DecodeError::InvalidJson)? {
        Value::Null => Value::Object(Map::new()),
        v => v,
    };

    if let Some(err) = provider_error(&value) {
        return Err(err);
    }

    serde_json::from_value(value).map_err(|e| DecodeError::UnexpectedShape(shape, e))
}

/// Deserialize a field, reading `null` as the field's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Extract the provider's error envelope, if the body is one
fn provider_error(value: &Value) -> Option<DecodeError> {
    let error = value.get("error")?.as_str()?;
    let description = value
        .get("error_description")
        .and_then(Value::as_str)
        .unwrap_or("no description given");

    Some(DecodeError::Provider {
        error: error.to_string(),
        description: description.to_string(),
    })
}
