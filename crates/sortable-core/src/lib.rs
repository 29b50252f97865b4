//! Sortable Core
//!
//! Shared utilities for the sortable list crates: collections, math,
//! viewport geometry, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
