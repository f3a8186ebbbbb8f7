//! Error types for hierarchy registration, lookup, and import.

use lineage_core::LinearizeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("Type name cannot be empty")]
    EmptyName,

    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    #[error("Type '{name}' lists parent '{parent}' more than once")]
    DuplicateParent { name: String, parent: String },

    #[error("Type '{name}' references unknown parent '{parent}'")]
    UnknownParent { name: String, parent: String },

    #[error("Type '{0}' is not registered")]
    UnknownType(String),

    #[error("Hierarchy contains a cycle: {}", .cycle.join(" -> "))]
    InvalidGraph { cycle: Vec<String> },

    #[error("Inconsistent hierarchy: {0}")]
    Inconsistent(#[from] LinearizeError),
}
