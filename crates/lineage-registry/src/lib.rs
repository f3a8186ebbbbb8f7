//! Hierarchy registry and linearization cache for lineage
//!
//! Owns the bookkeeping around the core merge: type registration with
//! eager validation, a universal root that closes every lineage, memoized
//! linearizations, ancestry queries over the inheritance graph, and
//! portable snapshots for export and re-import.

pub mod error;
pub mod registry;
pub mod snapshot;

pub use error::HierarchyError;
pub use registry::{HierarchyRegistry, DEFAULT_ROOT};
pub use snapshot::HierarchySnapshot;

// Core types that appear in this crate's public signatures.
pub use lineage_core::{Linearization, LinearizeError, TypeNode};
