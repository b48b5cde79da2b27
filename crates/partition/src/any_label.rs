//! Disjunctive partition: vertices carrying at least one partition label
//!
//! The fragment strategy depends on the label count:
//!
//! | Labels | Pattern | Predicate |
//! |--------|---------|-----------|
//! | 0 | no | no (fragment helper: `false`) |
//! | 1 | `(alias:L)` | no |
//! | 2+ | no | `(alias:L1 OR alias:L2 ...)` |
//!
//! A node pattern label list is an implicit AND. With two or more labels it
//! would turn the disjunction into a conjunction, so the predicate is the
//! only correct form there.
//!
//! With no labels the partition contains no vertex. Neither flag is set, so
//! an assembler driving the getters by hand gets no restriction;
//! [`ReadPartition::vertex_match_fragment`] closes that gap with a `false`
//! predicate.

use crate::contract::{protocol_fragment, ReadPartition, VertexMatchFragment};
use crate::semantics::LabelSemantics;
use labelgraph_core::VertexLabels;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Partition where a vertex must carry any of the partition labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyLabelReadPartition {
    labels: BTreeSet<String>,
}

impl AnyLabelReadPartition {
    /// Create a partition from the given labels (duplicates collapse)
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            warn!("any-label read partition has no labels: it contains no vertex and sets neither MATCH flag");
        }
        debug!(
            semantics = "any",
            label_count = labels.len(),
            "created read partition"
        );
        AnyLabelReadPartition { labels }
    }
}

impl ReadPartition for AnyLabelReadPartition {
    fn labels(&self) -> &BTreeSet<String> {
        &self.labels
    }

    fn semantics(&self) -> Option<LabelSemantics> {
        Some(LabelSemantics::Any)
    }

    fn contains_vertex(&self, vertex_labels: &dyn VertexLabels) -> bool {
        self.labels.iter().any(|label| vertex_labels.has_label(label))
    }

    fn uses_match_pattern(&self) -> bool {
        self.labels.len() == 1
    }

    fn uses_match_predicate(&self) -> bool {
        self.labels.len() > 1
    }

    fn vertex_match_predicate(&self, alias: &str) -> Option<String> {
        if self.labels.len() < 2 {
            return None;
        }
        let terms: Vec<String> = self
            .labels
            .iter()
            .map(|label| format!("{}:{}", alias, label))
            .collect();
        Some(format!("({})", terms.join(" OR ")))
    }

    fn vertex_match_fragment(&self, alias: &str) -> VertexMatchFragment {
        if self.labels.is_empty() {
            return VertexMatchFragment::matching_nothing();
        }
        protocol_fragment(self, alias)
    }
}
