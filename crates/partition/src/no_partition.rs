//! Read partition for an unpartitioned graph

use crate::contract::ReadPartition;
use crate::semantics::LabelSemantics;
use labelgraph_core::VertexLabels;
use std::collections::BTreeSet;

/// Partition admitting every vertex and allowing every label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoReadPartition {
    labels: BTreeSet<String>,
}

impl NoReadPartition {
    /// Create the unrestricted partition
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReadPartition for NoReadPartition {
    fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    fn semantics(&self) -> Option<LabelSemantics> {
        None
    }

    fn validate_label(&self, _label: &str) -> bool {
        true
    }

    fn contains_vertex(&self, _vertex_labels: &dyn VertexLabels) -> bool {
        true
    }

    fn uses_match_pattern(&self) -> bool {
        false
    }

    fn uses_match_predicate(&self) -> bool {
        false
    }

    fn vertex_match_predicate(&self, _alias: &str) -> Option<String> {
        None
    }
}
