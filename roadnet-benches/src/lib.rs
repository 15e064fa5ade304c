//! Benchmark support crate for roadnet.
//!
//! Provides seeded synthetic road grids and parameter types used by the
//! Criterion benchmarks for the shortest-route engine, the barely connected
//! map builder and the full analysis.

pub mod error;
pub mod grid;
pub mod params;
