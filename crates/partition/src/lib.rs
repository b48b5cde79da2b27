//! Label-based read partitions for a shared property graph
//!
//! A partition decides which vertices of a physically shared graph are
//! visible, which labels may be toggled on a vertex, and how to express the
//! membership test inside a Cypher `MATCH` clause.
//!
//! - `ReadPartition`: the contract consumed by the query assembler
//! - `AllLabelReadPartition`: vertex carries every partition label
//! - `AnyLabelReadPartition`: vertex carries at least one partition label
//! - `NoReadPartition`: unpartitioned graph
//! - `Partition`: closed set of the above
//! - `PartitionConfig`: TOML/JSON configuration
//!
//! ## Usage
//!
//! ```
//! use labelgraph_partition::{AnyLabelReadPartition, ReadPartition};
//!
//! let partition = AnyLabelReadPartition::new(["Tenant1", "Tenant2"]);
//! assert!(partition.contains_vertex(&["Person", "Tenant2"]));
//! assert!(!partition.validate_label("Tenant1"));
//! assert_eq!(
//!     partition.vertex_match_predicate("n").as_deref(),
//!     Some("(n:Tenant1 OR n:Tenant2)")
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod all_label;
pub mod any_label;
pub mod config;
pub mod contract;
pub mod no_partition;
pub mod partition;
pub mod semantics;

pub use all_label::AllLabelReadPartition;
pub use any_label::AnyLabelReadPartition;
pub use config::{PartitionConfig, CONFIG_FILE_NAME};
pub use contract::{ReadPartition, VertexMatchFragment, MATCH_NOTHING_PREDICATE};
pub use no_partition::NoReadPartition;
pub use partition::Partition;
pub use semantics::LabelSemantics;
