//! rotation-orbits conformance suite.
//!
//! This crate checks the engine against independent references: a table of
//! hand-checked orbits and a brute-force oracle that decides rotation
//! directly from the cyclic order of a union's points.
//!
//! # Conformance Scope
//!
//! | Layer | Standard |
//! |-------|----------|
//! | Rotational predicate | agrees with the cyclic-order oracle on single cycles, same-period unions and mixed-period unions |
//! | Orbit generation | exactly the oracle's cycles of each type, `C(q+σ-2, σ-2)` of them |
//! | Set enumeration | strategies agree, no duplicates, `q^(σ-2)` maximal sets, oracle unions reproduced |
//!
//! # Entry Point
//!
//! ```no_run
//! use rotation_orbits_conformance::{run_all, Grid};
//!
//! let report = run_all(&Grid::default()).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod fixtures;
pub mod grid;
pub mod oracle;
pub mod report;
pub mod validators;

pub use grid::{Grid, GridError};
pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Known orbits and unions
/// 2. Rotational predicate against the oracle
/// 3. Orbit generation against the oracle
/// 4. Orbit-set enumeration (strategy agreement, counts, oracle unions)
///
/// # Errors
///
/// Returns an error if the grid is invalid or the oracle cannot enumerate
/// a cycle family.
pub fn run_all(grid: &Grid) -> anyhow::Result<ConformanceReport> {
    grid.validate()?;
    let mut report = ConformanceReport::new();

    if grid.is_expensive() {
        report.push(TestResult::warn(
            "grid",
            format!("{grid:?} exceeds the recommended bounds; the oracle may be slow"),
        ));
    }

    // 1. Known values
    report.extend(validators::fixtures::validate());

    // 2. Rotational predicate
    report.extend(validators::predicate::validate(grid)?);

    // 3. Orbit generation
    report.extend(validators::generation::validate(grid)?);

    // 4. Orbit-set enumeration
    report.extend(validators::enumeration::validate(grid)?);

    Ok(report)
}
