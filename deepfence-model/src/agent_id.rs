//! The `ModelAgentId` payload: a reference to one agent by node id.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::id::NodeId;
use crate::mapped::MappedNullable;

/// Identifies an agent by the node it runs on.
///
/// Wire form is `{"node_id": "<string>"}`. `node_id` is required on decode;
/// other keys are ignored.
///
/// # Examples
///
/// ```
/// use deepfence_model::{AgentIdentifier, MappedNullable};
///
/// let agent = AgentIdentifier::new("host-1");
/// let bytes = agent.to_json().unwrap();
/// assert_eq!(bytes, br#"{"node_id":"host-1"}"#);
///
/// let back = AgentIdentifier::from_json(&bytes).unwrap();
/// assert_eq!(back, agent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "ModelAgentId")]
pub struct AgentIdentifier {
    node_id: NodeId,
}

impl AgentIdentifier {
    /// Create an identifier for the given node. The id is stored verbatim.
    pub fn new(node_id: impl Into<NodeId>) -> Self {
        Self {
            node_id: node_id.into(),
        }
    }

    /// Create an identifier with an empty node id.
    ///
    /// The required field is NOT populated. Only use this when the id is
    /// set immediately afterwards with [`set_node_id`](Self::set_node_id).
    pub fn unchecked_default() -> Self {
        Self {
            node_id: NodeId::new(String::new()),
        }
    }

    /// The node id.
    pub fn node_id(&self) -> &str {
        self.node_id.as_str()
    }

    /// The node id as its typed wrapper.
    pub fn node_id_ref(&self) -> &NodeId {
        &self.node_id
    }

    /// Replace the node id.
    pub fn set_node_id(&mut self, node_id: impl Into<NodeId>) {
        self.node_id = node_id.into();
    }

    /// Consume and return the node id.
    pub fn into_node_id(self) -> NodeId {
        self.node_id
    }
}

impl MappedNullable for AgentIdentifier {
    const NAME: &'static str = "ModelAgentId";
    const FIELDS: &'static [&'static str] = &["node_id"];

    fn to_map(&self) -> Result<Map<String, Value>, ModelError> {
        let mut map = Map::new();
        map.insert(
            "node_id".to_owned(),
            Value::String(self.node_id.as_str().to_owned()),
        );
        Ok(map)
    }
}

impl From<NodeId> for AgentIdentifier {
    fn from(node_id: NodeId) -> Self {
        Self { node_id }
    }
}
