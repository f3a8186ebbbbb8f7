//! Core C3 linearization engine for lineage
//!
//! Computes the resolution order of a type from the linearizations of its
//! immediate parents, or reports that no consistent order exists. The
//! engine is pure and allocation-light; hierarchy bookkeeping, caching,
//! and ancestry queries live in `lineage-registry`.

pub mod error;
pub mod linearization;
pub mod merge;
pub mod node;

pub use error::LinearizeError;
pub use linearization::Linearization;
pub use merge::linearize;
pub use node::TypeNode;
