//! Workload generator and benchmark utilities for upforest.
//!
//! This crate provides deterministic union sequences for benchmarking and
//! invariant checking of `upforest-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, build_forest, chain_unions, generate_unions};
