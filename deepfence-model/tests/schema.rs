use deepfence_model::*;
use serde::Serialize;

#[derive(Serialize, schemars::JsonSchema)]
struct ScanTrigger {
    #[serde(default, skip_serializing_if = "Nullable::is_omitted")]
    agent: NullableAgentIdentifier,
}

#[test]
fn agent_schema_requires_node_id() {
    let schema = serde_json::to_value(schemars::schema_for!(AgentIdentifier)).unwrap();
    assert_eq!(schema["required"], serde_json::json!(["node_id"]));
    assert!(schema["properties"].get("node_id").is_some());
}

#[test]
fn nullable_field_is_optional_in_parent() {
    let schema = serde_json::to_value(schemars::schema_for!(ScanTrigger)).unwrap();
    assert!(schema["properties"].get("agent").is_some());
    let required = schema.get("required").and_then(|r| r.as_array());
    assert!(required.is_none_or(|r| !r.iter().any(|k| k == "agent")));
}

#[test]
fn api_version_is_pinned() {
    assert_eq!(API_VERSION, "2.0.0");
}
