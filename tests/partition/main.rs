//! Read partition integration tests
//!
//! Exercises the partition strategies through the public facade, the way a
//! query assembler consumes them.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod fragments;
mod no_partition;
