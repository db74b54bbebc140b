//! Tri-state wrapper for optional model fields.
//!
//! JSON has three ways to say something about an optional field: leave the
//! key out, send `null`, or send a value. [`Nullable`] keeps all three apart
//! so a partial update can tell "don't touch" from "clear".
//!
//! A wrapper cannot remove its own key from the enclosing object, so
//! parents declare the field like this:
//!
//! ```
//! use deepfence_model::{AgentIdentifier, Nullable};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct ScanTrigger {
//!     #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
//!     agent: Nullable<AgentIdentifier>,
//! }
//!
//! let t = ScanTrigger { agent: Nullable::Omitted };
//! assert_eq!(serde_json::to_string(&t).unwrap(), "{}");
//!
//! let t = ScanTrigger { agent: Nullable::Null };
//! assert_eq!(serde_json::to_string(&t).unwrap(), r#"{"agent":null}"#);
//! ```

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::agent_id::AgentIdentifier;
use crate::error::ModelError;

/// An optional field that remembers whether it was sent at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The key is absent.
    Omitted,
    /// The key is present with value `null`.
    Null,
    /// The key is present with a value.
    Present(T),
}

/// [`Nullable`] wrapper around [`AgentIdentifier`].
pub type NullableAgentIdentifier = Nullable<AgentIdentifier>;

impl<T> Nullable<T> {
    /// A set wrapper: `Some(v)` becomes `Present(v)`, `None` becomes `Null`.
    pub fn new(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Null,
        }
    }

    /// The current value. `None` for both `Omitted` and `Null`.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Omitted | Self::Null => None,
        }
    }

    /// Mutable access to the current value.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Omitted | Self::Null => None,
        }
    }

    /// Store a value and mark the field as set, even when `value` is `None`.
    pub fn set(&mut self, value: Option<T>) {
        *self = Self::new(value);
    }

    /// Whether the field was set, to a value or to `null`.
    pub fn is_set(&self) -> bool {
        !self.is_omitted()
    }

    /// Forget the value and the fact that it was set.
    pub fn unset(&mut self) {
        *self = Self::Omitted;
    }

    /// Whether the key should be left out of the enclosing object.
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// Whether the field is an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether the field holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Take the value out, leaving the wrapper `Omitted`.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }

    /// Drop the omitted/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Omitted | Self::Null => None,
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Omitted => Nullable::Omitted,
            Self::Null => Nullable::Null,
            Self::Present(v) => Nullable::Present(v),
        }
    }

    /// Map the present value, keeping `Omitted` and `Null` as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        match self {
            Self::Omitted => Nullable::Omitted,
            Self::Null => Nullable::Null,
            Self::Present(v) => Nullable::Present(f(v)),
        }
    }

    /// Build from the `Option<Option<T>>` patch form: outer `None` is
    /// `Omitted`, `Some(None)` is `Null`.
    pub fn from_patch(patch: Option<Option<T>>) -> Self {
        match patch {
            None => Self::Omitted,
            Some(inner) => Self::new(inner),
        }
    }

    /// Convert to the `Option<Option<T>>` patch form.
    pub fn into_patch(self) -> Option<Option<T>> {
        match self {
            Self::Omitted => None,
            Self::Null => Some(None),
            Self::Present(v) => Some(Some(v)),
        }
    }

    /// Apply as a patch: `Omitted` keeps `target`, `Null` clears it,
    /// `Present` overwrites it.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Omitted => {}
            Self::Null => *target = None,
            Self::Present(v) => *target = Some(v),
        }
    }
}

impl<T: Serialize> Nullable<T> {
    /// Encode the inner value, or `null` when there is none.
    ///
    /// An `Omitted` wrapper also encodes as `null`; suppressing the key is
    /// the enclosing object's job.
    pub fn to_json(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(&self.get()).map_err(ModelError::encode)
    }
}

impl<T: DeserializeOwned> Nullable<T> {
    /// Decode a present key: `null` gives `Null`, anything else `Present`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice::<Option<T>>(bytes)
            .map(Self::new)
            .map_err(|e| {
                tracing::debug!(error = %e, "failed to decode nullable field");
                ModelError::decode(e)
            })
    }

    /// Decode into `self`. On failure `self` is left as it was.
    pub fn update_from_json(&mut self, bytes: &[u8]) -> Result<(), ModelError> {
        *self = Self::from_json(bytes)?;
        Ok(())
    }
}

impl Nullable<AgentIdentifier> {
    /// The node id, or `""` when no identifier is present.
    pub fn node_id(&self) -> &str {
        self.get().map(AgentIdentifier::node_id).unwrap_or_default()
    }

    /// The node id, or `None` when no identifier is present.
    pub fn node_id_ok(&self) -> Option<&str> {
        self.get().map(AgentIdentifier::node_id)
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Omitted
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(v) => serializer.serialize_some(v),
            Self::Omitted | Self::Null => serializer.serialize_none(),
        }
    }
}

// Only called when the key is present; a missing key goes through
// `#[serde(default)]` and stays `Omitted`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::new)
    }
}

impl<T: JsonSchema> JsonSchema for Nullable<T> {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        format!("Nullable_{}", T::schema_name()).into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        generator.subschema_for::<Option<T>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_omitted() {
        let n: Nullable<u32> = Nullable::default();
        assert!(n.is_omitted());
        assert!(!n.is_set());
    }

    #[test]
    fn set_none_is_null_but_set() {
        let mut n: Nullable<u32> = Nullable::Omitted;
        n.set(None);
        assert!(n.is_null());
        assert!(n.is_set());
        assert_eq!(n.get(), None);
    }

    #[test]
    fn take_leaves_omitted() {
        let mut n = Nullable::Present(7);
        assert_eq!(n.take(), Some(7));
        assert!(n.is_omitted());
    }

    #[test]
    fn patch_form_conversions() {
        assert_eq!(Nullable::<u8>::from_patch(None), Nullable::Omitted);
        assert_eq!(Nullable::<u8>::from_patch(Some(None)), Nullable::Null);
        assert_eq!(Nullable::from_patch(Some(Some(3u8))), Nullable::Present(3));
        assert_eq!(Nullable::<u8>::Null.into_patch(), Some(None));
    }
}
