//! Central registry for type hierarchies: registration, linearization
//! caching, and ancestry queries over the inheritance graph.

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexMap;
use lineage_core::{linearize, Linearization, TypeNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use tracing::{debug, info};

use crate::error::HierarchyError;
use crate::snapshot::{find_cycle, HierarchySnapshot};

/// Root name used when a registry is built without an explicit one.
pub const DEFAULT_ROOT: &str = "object";

#[derive(Debug)]
struct TypeEntry {
    node: TypeNode,
    index: NodeIndex,
}

/// A registered hierarchy of types closed under a single universal root.
///
/// The root is a real registered type: it is present from construction,
/// parentless types hang off it, and it terminates every linearization.
/// Registration is append-only and validates eagerly, so the stored graph
/// is acyclic by construction and every stored parent reference resolves.
///
/// # Example
///
/// ```rust
/// use lineage_registry::HierarchyRegistry;
///
/// let mut registry = HierarchyRegistry::new();
/// registry.register("Animal", &[]).unwrap();
/// registry.register("Pet", &["Animal"]).unwrap();
///
/// let order = registry.linearization("Pet").unwrap();
/// assert_eq!(order.to_string(), "Pet -> Animal -> object");
/// ```
#[derive(Debug)]
pub struct HierarchyRegistry {
    root: String,
    entries: IndexMap<String, TypeEntry>,
    graph: DiGraph<String, ()>,
    cache: HashMap<String, Linearization>,
}

impl HierarchyRegistry {
    /// Create an empty registry rooted at [`DEFAULT_ROOT`].
    pub fn new() -> Self {
        Self::rooted(DEFAULT_ROOT.to_string())
    }

    /// Create an empty registry with a caller-chosen root name.
    pub fn with_root(root: &str) -> Result<Self, HierarchyError> {
        if root.is_empty() {
            return Err(HierarchyError::EmptyName);
        }
        Ok(Self::rooted(root.to_string()))
    }

    fn rooted(root: String) -> Self {
        let mut registry = Self {
            root: root.clone(),
            entries: IndexMap::new(),
            graph: DiGraph::new(),
            cache: HashMap::new(),
        };
        registry.insert_entry(TypeNode::new(root, []));
        registry
    }

    /// Register a type with its immediate parents in declaration order.
    ///
    /// Every parent must already be registered. This rules out forward
    /// references and self-inheritance in one check, and it keeps the
    /// graph acyclic: a new node only ever gains outgoing edges.
    pub fn register(&mut self, name: &str, parents: &[&str]) -> Result<(), HierarchyError> {
        if name.is_empty() {
            return Err(HierarchyError::EmptyName);
        }
        if self.entries.contains_key(name) {
            return Err(HierarchyError::DuplicateType(name.to_string()));
        }
        let mut seen = HashSet::new();
        for parent in parents {
            if !seen.insert(*parent) {
                return Err(HierarchyError::DuplicateParent {
                    name: name.to_string(),
                    parent: (*parent).to_string(),
                });
            }
            if !self.entries.contains_key(*parent) {
                return Err(HierarchyError::UnknownParent {
                    name: name.to_string(),
                    parent: (*parent).to_string(),
                });
            }
        }
        self.insert_entry(TypeNode::new(name, parents.iter().copied()));
        Ok(())
    }

    /// Insert a pre-validated declaration into the entry table and graph.
    fn insert_entry(&mut self, node: TypeNode) {
        let index = self.graph.add_node(node.name.clone());
        let parent_names = self.effective_parents_of(&node);
        for parent in &parent_names {
            let parent_index = self.entries[parent.as_str()].index;
            self.graph.add_edge(index, parent_index, ());
        }
        debug!(
            "registered '{}' with parents [{}]",
            node.name,
            parent_names.join(", ")
        );
        self.entries.insert(node.name.clone(), TypeEntry { node, index });
    }

    /// The parents actually used for linearization: declared parents, or
    /// the root when none were declared. Only the root itself is truly
    /// parentless.
    fn effective_parents_of(&self, node: &TypeNode) -> Vec<String> {
        if node.parents.is_empty() && node.name != self.root {
            vec![self.root.clone()]
        } else {
            node.parents.clone()
        }
    }

    /// Linearization of a registered type, computing and caching it (and
    /// any uncached ancestors) on first request.
    pub fn linearization(&mut self, name: &str) -> Result<&Linearization, HierarchyError> {
        if !self.entries.contains_key(name) {
            return Err(HierarchyError::UnknownType(name.to_string()));
        }
        self.compute(name)?;
        Ok(&self.cache[name])
    }

    /// Compute and cache linearizations for every registered type,
    /// stopping at the first inconsistency in registration order.
    pub fn linearize_all(&mut self) -> Result<(), HierarchyError> {
        info!("linearizing all {} registered types", self.entries.len());
        let names: Vec<String> = self.entries.keys().cloned().collect();
        for name in names {
            self.compute(&name)?;
        }
        Ok(())
    }

    fn compute(&mut self, name: &str) -> Result<(), HierarchyError> {
        if self.cache.contains_key(name) {
            return Ok(());
        }
        // Parents first; the graph is acyclic so this recursion is finite.
        let parents = self.effective_parents_of(&self.entries[name].node);
        for parent in &parents {
            self.compute(parent)?;
        }
        let parent_lins: Vec<Linearization> =
            parents.iter().map(|parent| self.cache[parent].clone()).collect();
        let lin = linearize(name, &parent_lins)?;
        debug!("linearized '{}' ({} entries)", name, lin.len());
        self.cache.insert(name.to_string(), lin);
        Ok(())
    }

    /// Name of this registry's universal root.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered types. The root counts, so a fresh registry
    /// has length one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in registration order, root first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The stored declaration for a type, if registered.
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.entries.get(name).map(|entry| &entry.node)
    }

    /// Declared parents of a type, in declaration order. Empty for the
    /// root and for types that defaulted to it.
    pub fn parents(&self, name: &str) -> Result<&[String], HierarchyError> {
        self.entries
            .get(name)
            .map(|entry| entry.node.parents.as_slice())
            .ok_or_else(|| HierarchyError::UnknownType(name.to_string()))
    }

    /// All transitive ancestors of a type, excluding the type itself.
    pub fn ancestors(&self, name: &str) -> Result<HashSet<String>, HierarchyError> {
        self.reachable(name, Direction::Outgoing)
    }

    /// All transitive descendants of a type, excluding the type itself.
    pub fn descendants(&self, name: &str) -> Result<HashSet<String>, HierarchyError> {
        self.reachable(name, Direction::Incoming)
    }

    /// Whether `ancestor` appears somewhere above `descendant`. A type is
    /// not its own ancestor, and unknown names are simply not related.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        match self.ancestors(descendant) {
            Ok(found) => found.contains(ancestor),
            Err(_) => false,
        }
    }

    fn reachable(
        &self,
        name: &str,
        direction: Direction,
    ) -> Result<HashSet<String>, HierarchyError> {
        let start = self
            .entries
            .get(name)
            .map(|entry| entry.index)
            .ok_or_else(|| HierarchyError::UnknownType(name.to_string()))?;

        let mut found = HashSet::new();
        let mut to_visit = VecDeque::new();
        to_visit.push_back(start);
        while let Some(index) = to_visit.pop_front() {
            for next in self.graph.neighbors_directed(index, direction) {
                if found.insert(self.graph[next].clone()) {
                    to_visit.push_back(next);
                }
            }
        }
        Ok(found)
    }

    /// Export the hierarchy as a portable snapshot. Cached linearizations
    /// are not exported; an importer recomputes them on demand.
    pub fn snapshot(&self) -> HierarchySnapshot {
        HierarchySnapshot {
            root: self.root.clone(),
            declarations: self
                .entries
                .values()
                .filter(|entry| entry.node.name != self.root)
                .map(|entry| entry.node.clone())
                .collect(),
        }
    }

    /// Rebuild a registry from a snapshot, re-running every validation.
    ///
    /// Snapshot declarations may reference parents declared later in the
    /// list, so validation runs over the whole batch before anything is
    /// inserted, and an explicit cycle scan covers what the live
    /// registration order makes impossible.
    pub fn from_snapshot(snapshot: HierarchySnapshot) -> Result<Self, HierarchyError> {
        let HierarchySnapshot { root, declarations } = snapshot;

        let mut registry = Self::with_root(&root)?;
        let mut known: HashSet<&str> = HashSet::new();
        known.insert(root.as_str());
        for node in &declarations {
            if node.name.is_empty() {
                return Err(HierarchyError::EmptyName);
            }
            if !known.insert(node.name.as_str()) {
                return Err(HierarchyError::DuplicateType(node.name.clone()));
            }
        }
        for node in &declarations {
            let mut seen = HashSet::new();
            for parent in &node.parents {
                if !seen.insert(parent.as_str()) {
                    return Err(HierarchyError::DuplicateParent {
                        name: node.name.clone(),
                        parent: parent.clone(),
                    });
                }
                if !known.contains(parent.as_str()) {
                    return Err(HierarchyError::UnknownParent {
                        name: node.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }
        if let Some(cycle) = find_cycle(&root, &declarations) {
            return Err(HierarchyError::InvalidGraph { cycle });
        }

        info!(
            "rebuilding hierarchy from snapshot: {} declarations rooted at '{}'",
            declarations.len(),
            root
        );
        // Nodes first, then edges, so declaration order is preserved even
        // when a parent appears later in the list.
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();
        indices.insert(root.clone(), registry.entries[root.as_str()].index);
        for node in &declarations {
            let index = registry.graph.add_node(node.name.clone());
            indices.insert(node.name.clone(), index);
        }
        for node in declarations {
            let index = indices[node.name.as_str()];
            for parent in registry.effective_parents_of(&node) {
                registry.graph.add_edge(index, indices[parent.as_str()], ());
            }
            registry.entries.insert(node.name.clone(), TypeEntry { node, index });
        }
        Ok(registry)
    }
}

impl Default for HierarchyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
