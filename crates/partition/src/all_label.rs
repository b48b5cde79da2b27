//! Conjunctive partition: vertices carrying every partition label
//!
//! A node pattern label list is an implicit AND, so this partition is always
//! expressed as `(alias:L1:L2:...)` and never needs a predicate. The empty
//! partition degenerates to `(alias)` and admits every vertex.

use crate::contract::ReadPartition;
use crate::semantics::LabelSemantics;
use labelgraph_core::VertexLabels;
use std::collections::BTreeSet;
use tracing::debug;

/// Partition where a vertex must carry all partition labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllLabelReadPartition {
    labels: BTreeSet<String>,
}

impl AllLabelReadPartition {
    /// Create a partition from the given labels (duplicates collapse)
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        debug!(
            semantics = "all",
            label_count = labels.len(),
            "created read partition"
        );
        AllLabelReadPartition { labels }
    }
}

impl ReadPartition for AllLabelReadPartition {
    fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    fn semantics(&self) -> Option<LabelSemantics> {
        Some(LabelSemantics::All)
    }

    fn contains_vertex(&self, vertex_labels: &dyn VertexLabels) -> bool {
        self.labels.iter().all(|label| vertex_labels.has_label(label))
    }

    fn uses_match_pattern(&self) -> bool {
        true
    }

    fn uses_match_predicate(&self) -> bool {
        false
    }

    fn vertex_match_predicate(&self, _alias: &str) -> Option<String> {
        None
    }
}
