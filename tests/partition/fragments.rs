//! Cypher MATCH fragments as seen by a statement assembler

use labelgraph::{
    AllLabelReadPartition, AnyLabelReadPartition, Partition, ReadPartition, MATCH_NOTHING_PREDICATE,
};

/// Minimal assembler following the fragment protocol by hand.
fn assemble(partition: &dyn ReadPartition, alias: &str) -> String {
    let mut pattern = String::from(alias);
    if partition.uses_match_pattern() {
        for label in partition.vertex_match_pattern_labels() {
            pattern.push(':');
            pattern.push_str(label);
        }
    }
    let mut statement = format!("MATCH ({})", pattern);
    if partition.uses_match_predicate() {
        if let Some(predicate) = partition.vertex_match_predicate(alias) {
            statement.push_str(" WHERE ");
            statement.push_str(&predicate);
        }
    }
    statement
}

#[test]
fn conjunction_is_a_node_pattern() {
    let partition = AllLabelReadPartition::new(["Tenant1", "Live"]);
    assert_eq!(assemble(&partition, "n"), "MATCH (n:Live:Tenant1)");
}

#[test]
fn single_label_disjunction_is_a_node_pattern() {
    let partition = AnyLabelReadPartition::new(["Tenant1"]);
    assert_eq!(assemble(&partition, "n"), "MATCH (n:Tenant1)");
}

#[test]
fn multi_label_disjunction_is_a_predicate() {
    let partition = AnyLabelReadPartition::new(["l3", "l1", "l2"]);
    assert_eq!(
        assemble(&partition, "v"),
        "MATCH (v) WHERE (v:l1 OR v:l2 OR v:l3)"
    );
}

#[test]
fn predicate_has_one_disjunct_per_label() {
    let partition = AnyLabelReadPartition::new(["l1", "l2", "l2", "l1"]);
    let predicate = partition.vertex_match_predicate("n").unwrap();
    assert!(predicate.starts_with('(') && predicate.ends_with(')'));
    let terms: Vec<&str> = predicate[1..predicate.len() - 1].split(" OR ").collect();
    assert_eq!(terms, vec!["n:l1", "n:l2"]);
}

#[test]
fn predicate_uses_the_given_alias() {
    let partition = AnyLabelReadPartition::new(["a", "b"]);
    assert_eq!(
        partition.vertex_match_predicate("`my node`").as_deref(),
        Some("(`my node`:a OR `my node`:b)")
    );
}

#[test]
fn fragment_helper_matches_manual_protocol() {
    let cases = vec![
        Partition::all(["A", "B"]),
        Partition::any(["A"]),
        Partition::any(["A", "B"]),
        Partition::default(),
    ];
    for partition in cases {
        let fragment = partition.vertex_match_fragment("n");
        let mut expected = format!("MATCH {}", fragment.node_pattern("n"));
        if let Some(predicate) = fragment.predicate() {
            expected.push_str(" WHERE ");
            expected.push_str(predicate);
        }
        assert_eq!(assemble(&partition, "n"), expected);
    }
}

#[test]
fn fragments_are_stable_across_calls() {
    let partition = AnyLabelReadPartition::new(["x", "y", "z"]);
    let first = partition.vertex_match_predicate("n");
    for _ in 0..10 {
        assert_eq!(partition.vertex_match_predicate("n"), first);
    }
}

#[test]
fn empty_disjunction_fragment_matches_nothing() {
    let partition = AnyLabelReadPartition::new(Vec::<String>::new());
    assert!(!partition.contains_vertex(&crate::common::vertex(&["X"])));

    let fragment = partition.vertex_match_fragment("n");
    assert!(!fragment.is_unrestricted());
    assert_eq!(fragment.node_pattern("n"), "(n)");
    assert_eq!(fragment.predicate(), Some(MATCH_NOTHING_PREDICATE));

    let wrapped = Partition::any(Vec::<String>::new()).vertex_match_fragment("n");
    assert_eq!(wrapped, fragment);
}

#[test]
fn empty_conjunction_fragment_matches_everything() {
    let partition = AllLabelReadPartition::new(Vec::<String>::new());
    assert!(partition.contains_vertex(&crate::common::vertex(&["X"])));
    assert!(partition.vertex_match_fragment("n").is_unrestricted());
}
