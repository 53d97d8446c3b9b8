//! src/reducers/mod.rs
mod adder;
pub use adder::{Adder, Aggregate, KeyValue, RunAccumulator};
