//! Benchmark algorithm families.
//!
//! Each family keeps its implementations under `code/` (one file per
//! algorithm, exposed through `available_variants()`), its tests under
//! `test/`, and a `family()` constructor plus a `verify()` cross-check in
//! its `mod.rs`.

pub mod dp;
pub mod mst;
pub mod pathfinding;
pub mod sorting;
