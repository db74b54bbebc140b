//! ModelError: display text, variant classification, and propagation.

use deepfence_model::*;

#[test]
fn deserialization_error_display() {
    let err = ModelError::Deserialization("missing field `node_id`".into());
    assert!(err.to_string().contains("deserialization error"));
    assert!(err.to_string().contains("node_id"));
    assert!(err.is_decode());
}

#[test]
fn serialization_error_display() {
    let err = ModelError::Serialization("boom".into());
    assert_eq!(err.to_string(), "serialization error: boom");
    assert!(!err.is_decode());
}

#[test]
fn decode_error_propagates_through_question_mark() {
    fn load(bytes: &[u8]) -> Result<String, ModelError> {
        let agent = AgentIdentifier::from_json(bytes)?;
        Ok(agent.node_id().to_owned())
    }
    assert_eq!(load(br#"{"node_id":"a"}"#).unwrap(), "a");
    assert!(load(b"[]").unwrap_err().is_decode());
}

#[test]
fn error_is_send_sync() {
    fn _assert_send_sync<T: Send + Sync + std::error::Error>() {}
    _assert_send_sync::<ModelError>();
}
