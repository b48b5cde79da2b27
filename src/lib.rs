//! labelgraph - Label-based read partitions for a shared property graph
//!
//! A partition restricts reads and label mutations to a logical subset of a
//! physically shared graph, keyed on vertex labels.
//!
//! # Quick Start
//!
//! ```
//! use labelgraph::{Partition, ReadPartition};
//!
//! let partition = Partition::all(["Tenant1", "Live"]);
//!
//! // Membership over the vertex's current labels
//! assert!(partition.contains_vertex(&["Person", "Tenant1", "Live"]));
//!
//! // Partition labels are reserved
//! assert!(!partition.validate_label("Live"));
//!
//! // Fragment for the MATCH clause
//! let fragment = partition.vertex_match_fragment("n");
//! assert_eq!(fragment.node_pattern("n"), "(n:Live:Tenant1)");
//! assert_eq!(fragment.predicate(), None);
//! ```
//!
//! # Architecture
//!
//! Error types and the vertex label view live in `labelgraph-core`; the
//! strategies and configuration live in `labelgraph-partition`. Both are
//! re-exported here.

pub use labelgraph_core::{PartitionError, Result, VertexLabels};
pub use labelgraph_partition::*;
