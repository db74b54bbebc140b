//! The map-projection seam shared by every API model.
//!
//! Each model knows how to turn itself into a JSON object map, and that
//! map is what gets written to the wire. Decoding goes through serde and
//! honours [`CodecConfig::strict`] for unknown fields.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::CodecConfig;
use crate::error::ModelError;

/// A JSON object model of the ThreatMapper API.
pub trait MappedNullable: Serialize + DeserializeOwned {
    /// Model name as it appears in the API schema.
    const NAME: &'static str;

    /// Field names the model declares on the wire.
    const FIELDS: &'static [&'static str];

    /// Project the model onto the JSON object written to the wire.
    fn to_map(&self) -> Result<Map<String, Value>, ModelError>;

    /// Encode as compact JSON.
    fn to_json(&self) -> Result<Vec<u8>, ModelError> {
        self.to_json_with(&CodecConfig::default())
    }

    /// Encode with the given configuration.
    fn to_json_with(&self, config: &CodecConfig) -> Result<Vec<u8>, ModelError> {
        let map = self.to_map()?;
        let out = if config.pretty {
            serde_json::to_vec_pretty(&map)
        } else {
            serde_json::to_vec(&map)
        };
        out.map_err(ModelError::encode)
    }

    /// Decode from JSON, ignoring unknown fields.
    fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        Self::from_json_with(bytes, &CodecConfig::default())
    }

    /// Decode from JSON with the given configuration.
    fn from_json_with(bytes: &[u8], config: &CodecConfig) -> Result<Self, ModelError> {
        decode_object(Self::NAME, Self::FIELDS, bytes, config)
    }

    /// Decode into `self`. On failure `self` is left as it was.
    fn update_from_json(&mut self, bytes: &[u8]) -> Result<(), ModelError> {
        *self = Self::from_json(bytes)?;
        Ok(())
    }
}

fn decode_object<T: DeserializeOwned>(
    name: &str,
    fields: &[&str],
    bytes: &[u8],
    config: &CodecConfig,
) -> Result<T, ModelError> {
    // Strict mode only adds the unknown-key check; the typed decode below
    // is shared so both modes reject the same malformed objects.
    if config.strict {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| decode_err(name, e))?;
        if let Some(key) = unknown_field(&value, fields) {
            tracing::trace!(model = name, field = key, "rejecting unknown field");
            return Err(ModelError::Deserialization(format!(
                "unknown field `{key}` in {name}"
            )));
        }
    }
    serde_json::from_slice(bytes).map_err(|e| decode_err(name, e))
}

fn decode_err(name: &str, err: serde_json::Error) -> ModelError {
    tracing::debug!(model = name, error = %err, "failed to decode model");
    ModelError::decode(err)
}

/// First key of `value` not listed in `fields`, if `value` is an object.
fn unknown_field<'a>(value: &'a Value, fields: &[&str]) -> Option<&'a str> {
    value
        .as_object()?
        .keys()
        .map(String::as_str)
        .find(|k| !fields.contains(k))
}
