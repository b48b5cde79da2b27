//! Read-only view over a vertex's label set
//!
//! Partitions never own vertex labels. The graph layer hands in whatever
//! collection it already holds for a vertex, and the partition only asks
//! membership questions through [`VertexLabels`]. Nothing is retained past
//! the call.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Membership queries over a caller-owned vertex label collection
///
/// Implemented for the standard set and sequence types holding either
/// `String` or `&str`. Sequences are scanned linearly; duplicates in a
/// sequence are harmless since only membership is observed.
pub trait VertexLabels {
    /// Check if the vertex carries `label`
    fn has_label(&self, label: &str) -> bool;
}

impl<S: BuildHasher> VertexLabels for HashSet<String, S> {
    #[inline]
    fn has_label(&self, label: &str) -> bool {
        self.contains(label)
    }
}

impl<S: BuildHasher> VertexLabels for HashSet<&str, S> {
    #[inline]
    fn has_label(&self, label: &str) -> bool {
        self.contains(label)
    }
}

impl VertexLabels for BTreeSet<String> {
    #[inline]
    fn has_label(&self, label: &str) -> bool {
        self.contains(label)
    }
}

impl VertexLabels for BTreeSet<&str> {
    #[inline]
    fn has_label(&self, label: &str) -> bool {
        self.contains(label)
    }
}

impl VertexLabels for Vec<String> {
    fn has_label(&self, label: &str) -> bool {
        self.iter().any(|l| l == label)
    }
}

impl VertexLabels for Vec<&str> {
    fn has_label(&self, label: &str) -> bool {
        self.iter().any(|l| *l == label)
    }
}

impl<const N: usize> VertexLabels for [&str; N] {
    fn has_label(&self, label: &str) -> bool {
        self.iter().any(|l| *l == label)
    }
}

impl<const N: usize> VertexLabels for [String; N] {
    fn has_label(&self, label: &str) -> bool {
        self.iter().any(|l| l == label)
    }
}
