//! C3 linearization by constrained merge of parent linearizations.
//!
//! # Merge Semantics
//!
//! Given a type and the already-computed linearizations of its immediate
//! parents, the merge interleaves those sequences into a single order:
//!
//! - the inputs are the parent linearizations left to right in declared
//!   order, followed by one final sequence holding just the immediate
//!   parents themselves (this is what preserves local precedence)
//! - at each step the candidate is the first sequence head that appears
//!   in no other sequence's tail; it is appended to the output and
//!   removed from the head of every sequence that starts with it
//! - the merge fails when input remains but every head is blocked, which
//!   means the parent declarations contradict each other about ordering
//!
//! Ties always go to the leftmost eligible head, so the result is fully
//! deterministic for a given input.
//!
//! # Example
//!
//! ```rust
//! use lineage_core::linearize;
//!
//! let root = linearize("object", &[]).unwrap();
//! let animal = linearize("Animal", &[root]).unwrap();
//! assert_eq!(animal.to_string(), "Animal -> object");
//! ```

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::LinearizeError;
use crate::linearization::Linearization;

/// Compute the linearization of `name` from its parents' linearizations,
/// given in declaration order.
///
/// With no parents the result is just `[name]`. Empty parent
/// linearizations are skipped, so a degenerate input cannot stall the
/// merge.
pub fn linearize(
    name: &str,
    parents: &[Linearization],
) -> Result<Linearization, LinearizeError> {
    let mut sequences: Vec<VecDeque<&str>> = parents
        .iter()
        .filter(|lin| !lin.is_empty())
        .map(|lin| lin.names().collect())
        .collect();
    if !sequences.is_empty() {
        // The declared-parent sequence, recovered from the heads.
        let declared: VecDeque<&str> = sequences.iter().map(|seq| seq[0]).collect();
        sequences.push(declared);
    }

    let mut order = vec![name.to_string()];
    while !sequences.is_empty() {
        match select_head(&sequences) {
            Some(head) => {
                trace!("merge for '{}': taking '{}'", name, head);
                for seq in &mut sequences {
                    if seq.front() == Some(&head) {
                        seq.pop_front();
                    }
                }
                sequences.retain(|seq| !seq.is_empty());
                order.push(head.to_string());
            }
            None => {
                let unresolved = unresolved_heads(&sequences);
                debug!(
                    "merge for '{}' stuck with unresolved heads [{}]",
                    name,
                    unresolved.join(", ")
                );
                return Err(LinearizeError::InconsistentHierarchy {
                    name: name.to_string(),
                    unresolved,
                });
            }
        }
    }

    Ok(Linearization::new(order))
}

/// Scan the sequences left to right for the first head that is in no
/// other sequence's tail.
fn select_head<'a>(sequences: &[VecDeque<&'a str>]) -> Option<&'a str> {
    sequences.iter().find_map(|seq| {
        let head = *seq.front()?;
        let blocked = sequences
            .iter()
            .any(|other| other.iter().skip(1).any(|entry| *entry == head));
        if blocked {
            None
        } else {
            Some(head)
        }
    })
}

/// The distinct heads left standing when the merge gives up, in scan
/// order. These are the names the declarations disagree about.
fn unresolved_heads(sequences: &[VecDeque<&str>]) -> Vec<String> {
    let mut heads: Vec<String> = Vec::new();
    for seq in sequences {
        if let Some(head) = seq.front() {
            if !heads.iter().any(|seen| seen == head) {
                heads.push((*head).to_string());
            }
        }
    }
    heads
}
