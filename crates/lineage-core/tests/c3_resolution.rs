//! End-to-end linearization of a four-level multiple-inheritance tower,
//! driven entirely through the public API.

use lineage_core::{linearize, Linearization, LinearizeError};
use pretty_assertions::assert_eq;

fn names(lin: &Linearization) -> Vec<&str> {
    lin.names().collect()
}

fn child(name: &str, parents: &[&Linearization]) -> Linearization {
    let owned: Vec<Linearization> = parents.iter().map(|lin| (*lin).clone()).collect();
    linearize(name, &owned).unwrap()
}

struct Tower {
    l2a: Linearization,
    l2b: Linearization,
    l2c: Linearization,
    l3a: Linearization,
    l3b: Linearization,
    l4: Linearization,
}

fn build_tower() -> Tower {
    let object = linearize("object", &[]).unwrap();
    let l1a = child("L1A", &[&object]);
    let l1b = child("L1B", &[&object]);
    let l1c = child("L1C", &[&object]);
    let l2a = child("L2A", &[&l1a, &l1b]);
    let l2b = child("L2B", &[&l1b, &l1c]);
    let l2c = child("L2C", &[&l1b, &l1c]);
    let l3a = child("L3A", &[&l1a, &l2c, &l1b]);
    let l3b = child("L3B", &[&l1a, &l2b, &l1c]);
    let l4 = child("L4", &[&l3a, &l3b, &l2a]);
    Tower {
        l2a,
        l2b,
        l2c,
        l3a,
        l3b,
        l4,
    }
}

#[test]
fn test_second_level_orders() {
    let tower = build_tower();
    assert_eq!(names(&tower.l2a), vec!["L2A", "L1A", "L1B", "object"]);
    assert_eq!(names(&tower.l2b), vec!["L2B", "L1B", "L1C", "object"]);
    assert_eq!(names(&tower.l2c), vec!["L2C", "L1B", "L1C", "object"]);
}

#[test]
fn test_third_level_orders() {
    let tower = build_tower();
    assert_eq!(
        names(&tower.l3a),
        vec!["L3A", "L1A", "L2C", "L1B", "L1C", "object"]
    );
    assert_eq!(
        names(&tower.l3b),
        vec!["L3B", "L1A", "L2B", "L1B", "L1C", "object"]
    );
}

#[test]
fn test_fourth_level_order() {
    let tower = build_tower();
    assert_eq!(
        names(&tower.l4),
        vec![
            "L4", "L3A", "L3B", "L2A", "L1A", "L2C", "L2B", "L1B", "L1C", "object"
        ]
    );
    assert_eq!(tower.l4.head(), "L4");
    assert_eq!(tower.l4.names().last(), Some("object"));
}

#[test]
fn test_tower_display() {
    let tower = build_tower();
    assert_eq!(
        tower.l3a.to_string(),
        "L3A -> L1A -> L2C -> L1B -> L1C -> object"
    );
}

#[test]
fn test_reversing_an_ancestor_pair_fails() {
    let tower = build_tower();
    // L3A's linearization places L2C after L3A, so declaring the parents
    // as [L2C, L3A] demands the opposite order. No merge satisfies both.
    let err = linearize("E1", &[tower.l2c.clone(), tower.l3a.clone()]).unwrap_err();
    match err {
        LinearizeError::InconsistentHierarchy { name, unresolved } => {
            assert_eq!(name, "E1");
            assert_eq!(unresolved, vec!["L2C", "L3A"]);
        }
    }
}

#[test]
fn test_monotonicity_of_the_tower() {
    let tower = build_tower();
    // Every pairwise order in a parent's linearization is preserved in
    // the child's.
    for parent in [&tower.l3a, &tower.l3b, &tower.l2a] {
        let sequence: Vec<&str> = parent.names().collect();
        for (i, before) in sequence.iter().enumerate() {
            for after in &sequence[i + 1..] {
                assert!(
                    tower.l4.precedes(before, after),
                    "L4 reorders {} and {} from {}",
                    before,
                    after,
                    parent.head()
                );
            }
        }
    }
}
