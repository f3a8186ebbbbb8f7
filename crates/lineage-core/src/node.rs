//! Type declarations, the input vocabulary of the linearizer.

use serde::{Deserialize, Serialize};

/// A declared type: a unique name plus its immediate parents in
/// declaration order.
///
/// Parent order is semantically significant. Declaring `Z` with parents
/// `[X, Y]` and declaring it with `[Y, X]` are different hierarchies and
/// can linearize differently (or one can fail where the other succeeds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeNode {
    /// Unique type name.
    pub name: String,
    /// Immediate parents, most preferred first. Empty means the type
    /// inherits directly from the universal root.
    pub parents: Vec<String>,
}

impl TypeNode {
    /// Create a declaration from a name and its ordered parent list.
    pub fn new<S>(name: S, parents: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            parents: parents.into_iter().map(Into::into).collect(),
        }
    }
}
