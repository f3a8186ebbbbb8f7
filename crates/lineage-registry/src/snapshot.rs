//! Serializable hierarchy snapshots for export and re-import.

use std::collections::HashMap;

use lineage_core::TypeNode;
use petgraph::algo::{is_cyclic_directed, kosaraju_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

/// A complete, portable description of a hierarchy: the root name plus
/// every declaration in registration order.
///
/// The root itself is implicit and never appears among the declarations.
/// Importing a snapshot re-runs full validation, so a snapshot edited by
/// hand (or produced by another tool) is checked as strictly as live
/// registrations are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    /// Name of the universal root.
    pub root: String,
    /// Non-root declarations in their original registration order.
    pub declarations: Vec<TypeNode>,
}

/// Scan a declaration batch for inheritance cycles.
///
/// Live registration cannot create a cycle because parents must already
/// exist, but snapshot declarations may reference each other in any
/// order, so the imported edge set needs an explicit check. Returns the
/// members of the first non-trivial strongly connected component, or the
/// single offending name for a self-loop.
pub(crate) fn find_cycle(root: &str, declarations: &[TypeNode]) -> Option<Vec<String>> {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    indices.insert(root, graph.add_node(root));
    for node in declarations {
        indices.insert(&node.name, graph.add_node(&node.name));
    }
    for node in declarations {
        let child = indices[node.name.as_str()];
        if node.parents.is_empty() {
            graph.add_edge(child, indices[root], ());
        } else {
            for parent in &node.parents {
                graph.add_edge(child, indices[parent.as_str()], ());
            }
        }
    }

    if !is_cyclic_directed(&graph) {
        return None;
    }
    for component in kosaraju_scc(&graph) {
        if component.len() > 1 {
            return Some(component.iter().map(|&idx| graph[idx].to_string()).collect());
        }
        let idx = component[0];
        if graph.contains_edge(idx, idx) {
            return Some(vec![graph[idx].to_string()]);
        }
    }
    None
}
