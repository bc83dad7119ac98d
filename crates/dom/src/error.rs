//! Error types for the host object model
//!
//! Flat hierarchy. The element guard never produces any of these; they come
//! from building documents and parsing tag names.

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Invalid character in element name: {0:?}")]
    InvalidCharacter(String),

    #[error("Unknown HTML tag: {0:?}")]
    UnknownTag(String),

    #[error("CDP protocol error: {0}")]
    CdpError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
