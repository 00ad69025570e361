//! Error types for DOM operations
//!
//! Simple, flat error hierarchy. No over-engineering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(u32),

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Document has no {0} element")]
    MissingElement(&'static str),

    #[error("Cannot append node {child} to {parent}: node is an ancestor of its new parent")]
    HierarchyRequest { parent: u32, child: u32 },
}
