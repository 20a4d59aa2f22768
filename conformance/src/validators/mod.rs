//! Validators, one module per engine layer.
//!
//! Each validator returns a [`ConformanceReport`](crate::ConformanceReport)
//! and reports engine errors as failures rather than aborting the run.

pub mod enumeration;
pub mod fixtures;
pub mod generation;
pub mod predicate;
