//! Core types for labelgraph
//!
//! This crate defines the foundational types used by the partition layer:
//! - PartitionError: Error taxonomy (precondition violations, configuration errors)
//! - VertexLabels: Read-only view over a caller-owned vertex label set

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod label;

pub use error::{PartitionError, Result};
pub use label::VertexLabels;
