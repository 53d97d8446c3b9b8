//! src/mappers/mod.rs
mod goal;
pub use goal::GoalMapper;
