//! Overlay module - Entry points used by reconciliation.
//!
//! Reconcile logic calls one adapter per top-level collection, or merges a
//! whole [`CustomObject`] / [`Environment`] at once. Inputs are never
//! mutated; every call returns a newly owned tree.

mod adapters;
mod environment;


pub use adapters::*;
pub use environment::*;
