//! tests/api/main.rs
mod mapper;
mod pipeline;
mod reducer;
