//! NoReadPartition behaviour

use crate::common::vertex;
use labelgraph::{NoReadPartition, Partition, ReadPartition};

#[test]
fn every_vertex_is_visible() {
    let partition = NoReadPartition::new();
    assert!(partition.contains_vertex(&vertex(&[])));
    assert!(partition.contains_vertex(&vertex(&["Person", "Tenant1"])));
}

#[test]
fn every_label_is_assignable() {
    let partition = NoReadPartition::new();
    assert!(partition.validate_label("Tenant1"));
}

#[test]
fn no_fragment_is_generated() {
    let partition = Partition::default();
    assert!(!partition.uses_match_pattern());
    assert!(!partition.uses_match_predicate());
    assert!(partition.vertex_match_pattern_labels().is_empty());
    assert_eq!(partition.vertex_match_predicate("n"), None);
    assert_eq!(partition.vertex_match_fragment("n").node_pattern("n"), "(n)");
}
