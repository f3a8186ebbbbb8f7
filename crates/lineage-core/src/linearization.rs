//! Resolution orders produced by the merge.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A computed resolution order: the type itself first, then every
/// transitive ancestor exactly once, ending with the universal root.
///
/// Linearizations are immutable once computed. Equality is positional, so
/// two linearizations are equal only when they agree on the complete
/// order. Serialization is transparent: a linearization is encoded as a
/// plain sequence of names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Linearization(Vec<String>);

impl Linearization {
    pub(crate) fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// The type this order belongs to (always the first entry).
    pub fn head(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// Iterate the order from the type itself down to the universal root.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The order as a slice of owned names.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|entry| entry == name)
    }

    /// Position of `name` in the order, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|entry| entry == name)
    }

    /// Whether `before` appears strictly ahead of `after` in this order.
    /// Returns `false` when either name is absent.
    pub fn precedes(&self, before: &str, after: &str) -> bool {
        match (self.position(before), self.position(after)) {
            (Some(b), Some(a)) => b < a,
            _ => false,
        }
    }

    /// Consume the linearization, yielding the owned name sequence.
    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for Linearization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}
