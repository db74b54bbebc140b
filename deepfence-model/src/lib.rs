//! # deepfence-model — typed models for the Deepfence ThreatMapper API
//!
//! Request and response payloads of the ThreatMapper REST API (version
//! 2.0.0), with the JSON encoding the server speaks.
//!
//! | Type | What it is |
//! |------|------------|
//! | [`AgentIdentifier`] | `ModelAgentId`: one agent, referenced by node id |
//! | [`NodeId`] | Typed node identifier |
//! | [`Nullable`] | Optional field that tells omitted, `null` and set apart |
//! | [`MappedNullable`] | Map projection and JSON codec shared by all models |
//! | [`CodecConfig`] | Pretty output and strict decoding switches |
//!
//! Transport, authentication and retries belong to the HTTP client that
//! hands these types raw bytes. Nothing here performs I/O.
//!
//! ## Errors
//!
//! Every fallible operation returns [`ModelError`]. Decode failures are also
//! emitted as `tracing` debug events; install a subscriber to see them.

#![deny(missing_docs)]

pub mod agent_id;
pub mod config;
pub mod error;
pub mod id;
pub mod mapped;
pub mod nullable;

pub use agent_id::AgentIdentifier;
pub use config::CodecConfig;
pub use error::ModelError;
pub use id::NodeId;
pub use mapped::MappedNullable;
pub use nullable::{Nullable, NullableAgentIdentifier};

/// Version of the ThreatMapper API these models describe.
pub const API_VERSION: &str = "2.0.0";
