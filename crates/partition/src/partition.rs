//! Closed set of partition strategies
//!
//! [`Partition`] wraps every strategy shipped by this crate so callers that
//! hold a partition by value get exhaustive matching. Callers that accept
//! their own strategies use `dyn ReadPartition` instead.

use crate::all_label::AllLabelReadPartition;
use crate::any_label::AnyLabelReadPartition;
use crate::contract::{ReadPartition, VertexMatchFragment};
use crate::no_partition::NoReadPartition;
use crate::semantics::LabelSemantics;
use labelgraph_core::VertexLabels;
use std::collections::BTreeSet;

/// A read partition built from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// Vertex must carry every label
    All(AllLabelReadPartition),
    /// Vertex must carry at least one label
    Any(AnyLabelReadPartition),
    /// Graph is not partitioned
    None(NoReadPartition),
}

impl Partition {
    /// Conjunctive partition over `labels`
    pub fn all<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Partition::All(AllLabelReadPartition::new(labels))
    }

    /// Disjunctive partition over `labels`
    pub fn any<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Partition::Any(AnyLabelReadPartition::new(labels))
    }

    /// Partition with the given semantics over `labels`
    pub fn with_semantics<I, S>(semantics: LabelSemantics, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match semantics {
            LabelSemantics::All => Partition::all(labels),
            LabelSemantics::Any => Partition::any(labels),
        }
    }

    /// Check if the graph is not partitioned
    pub fn is_none(&self) -> bool {
        matches!(self, Partition::None(_))
    }

    fn inner(&self) -> &dyn ReadPartition {
        match self {
            Partition::All(p) => p,
            Partition::Any(p) => p,
            Partition::None(p) => p,
        }
    }
}

impl Default for Partition {
    fn default() -> Self {
        Partition::None(NoReadPartition::new())
    }
}

impl From<AllLabelReadPartition> for Partition {
    fn from(p: AllLabelReadPartition) -> Self {
        Partition::All(p)
    }
}

impl From<AnyLabelReadPartition> for Partition {
    fn from(p: AnyLabelReadPartition) -> Self {
        Partition::Any(p)
    }
}

impl From<NoReadPartition> for Partition {
    fn from(p: NoReadPartition) -> Self {
        Partition::None(p)
    }
}

impl ReadPartition for Partition {
    fn labels(&self) -> &BTreeSet<String> {
        self.inner().labels()
    }

    fn semantics(&self) -> Option<LabelSemantics> {
        self.inner().semantics()
    }

    fn validate_label(&self, label: &str) -> bool {
        self.inner().validate_label(label)
    }

    fn contains_vertex(&self, vertex_labels: &dyn VertexLabels) -> bool {
        self.inner().contains_vertex(vertex_labels)
    }

    fn uses_match_pattern(&self) -> bool {
        self.inner().uses_match_pattern()
    }

    fn uses_match_predicate(&self) -> bool {
        self.inner().uses_match_predicate()
    }

    fn vertex_match_pattern_labels(&self) -> &BTreeSet<String> {
        self.inner().vertex_match_pattern_labels()
    }

    fn vertex_match_predicate(&self, alias: &str) -> Option<String> {
        self.inner().vertex_match_predicate(alias)
    }

    fn vertex_match_fragment(&self, alias: &str) -> VertexMatchFragment {
        self.inner().vertex_match_fragment(alias)
    }
}
