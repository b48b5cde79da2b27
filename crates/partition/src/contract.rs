//! The read partition contract
//!
//! A read partition restricts a physically shared graph to a logical subset
//! of its vertices, keyed on vertex labels. The query layer is agnostic of
//! the strategy behind a partition: it asks whether a vertex is visible,
//! whether a label may be toggled, and which Cypher fragment expresses the
//! membership test inside a `MATCH` clause.
//!
//! ## Fragment protocol
//!
//! The assembler must check [`ReadPartition::uses_match_pattern`] before
//! calling [`ReadPartition::vertex_match_pattern_labels`], and
//! [`ReadPartition::uses_match_predicate`] before calling
//! [`ReadPartition::vertex_match_predicate`]. The getters do not guard
//! themselves. [`ReadPartition::vertex_match_fragment`] runs that protocol
//! and hands back both pieces at once.

use crate::semantics::LabelSemantics;
use labelgraph_core::VertexLabels;
use std::collections::BTreeSet;
use std::fmt;

/// Strategy deciding vertex visibility and label mutability from labels
///
/// Implementations are immutable once built, so every method is a pure
/// function of the partition and its arguments and may be called from any
/// number of threads concurrently.
pub trait ReadPartition: Send + Sync + fmt::Debug {
    /// Labels defining the partition, in sorted order
    fn labels(&self) -> &BTreeSet<String>;

    /// Combination semantics, `None` for a graph without partition
    fn semantics(&self) -> Option<LabelSemantics>;

    /// Check if `label` can be added to or removed from a vertex
    ///
    /// Partition labels are reserved: toggling one would move the vertex in
    /// or out of the partition. Every other label is allowed.
    fn validate_label(&self, label: &str) -> bool {
        !self.labels().contains(label)
    }

    /// Check if a vertex with the given labels belongs to the partition
    fn contains_vertex(&self, vertex_labels: &dyn VertexLabels) -> bool;

    /// Check if a node-pattern label list alone expresses membership
    fn uses_match_pattern(&self) -> bool;

    /// Check if a boolean predicate is needed to express membership
    fn uses_match_predicate(&self) -> bool;

    /// Labels to embed in the node pattern, e.g. `(alias:L1:L2)`
    ///
    /// Only meaningful when [`uses_match_pattern`](Self::uses_match_pattern)
    /// returns `true`.
    fn vertex_match_pattern_labels(&self) -> &BTreeSet<String> {
        self.labels()
    }

    /// Boolean expression over `alias`, e.g. `(alias:L1 OR alias:L2)`
    ///
    /// `alias` must already be a valid, escaped Cypher identifier.
    fn vertex_match_predicate(&self, alias: &str) -> Option<String>;

    /// Pattern and predicate fragments for `alias`, following the protocol
    ///
    /// Strategies whose flags cannot express "no vertex" override this so the
    /// fragment never admits more than [`contains_vertex`](Self::contains_vertex).
    fn vertex_match_fragment(&self, alias: &str) -> VertexMatchFragment {
        protocol_fragment(self, alias)
    }
}

/// Build the fragment by checking each flag before calling its getter
pub(crate) fn protocol_fragment<P: ReadPartition + ?Sized>(
    partition: &P,
    alias: &str,
) -> VertexMatchFragment {
    let pattern_labels = if partition.uses_match_pattern() {
        render_pattern_labels(partition.vertex_match_pattern_labels())
    } else {
        String::new()
    };
    let predicate = if partition.uses_match_predicate() {
        partition.vertex_match_predicate(alias)
    } else {
        None
    };
    VertexMatchFragment {
        pattern_labels,
        predicate,
    }
}

/// Predicate emitted for a partition that contains no vertex
pub const MATCH_NOTHING_PREDICATE: &str = "false";

/// Cypher fragments restricting a `MATCH` on one vertex variable
///
/// Only fragments: the surrounding `MATCH`/`WHERE` keywords and any
/// combination with other filters belong to the statement assembler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexMatchFragment {
    pattern_labels: String,
    predicate: Option<String>,
}

impl VertexMatchFragment {
    /// Fragment whose predicate matches no vertex
    pub(crate) fn matching_nothing() -> Self {
        VertexMatchFragment {
            pattern_labels: String::new(),
            predicate: Some(MATCH_NOTHING_PREDICATE.to_string()),
        }
    }

    /// Label list suffix for the node pattern, e.g. `:L1:L2` (may be empty)
    pub fn pattern_labels(&self) -> &str {
        &self.pattern_labels
    }

    /// Predicate to add to the `WHERE` clause, if any
    pub fn predicate(&self) -> Option<&str> {
        self.predicate.as_deref()
    }

    /// Node pattern for `alias`, e.g. `(n:L1:L2)`
    pub fn node_pattern(&self, alias: &str) -> String {
        format!("({}{})", alias, self.pattern_labels)
    }

    /// Check if the fragment restricts nothing
    pub fn is_unrestricted(&self) -> bool {
        self.pattern_labels.is_empty() && self.predicate.is_none()
    }
}

fn render_pattern_labels(labels: &BTreeSet<String>) -> String {
    let mut out = String::with_capacity(labels.iter().map(|l| l.len() + 1).sum());
    for label in labels {
        out.push(':');
        out.push_str(label);
    }
    out
}
