//! Orbit generation validator.
//!
//! For every `(σ, p/q)` in the grid the generated orbits must be exactly
//! the oracle's cycles of that type, `C(q + σ - 2, σ - 2)` of them, each
//! rotational with rotation number `p/q`.

use std::collections::BTreeSet;

use anyhow::Result;
use rotation_orbits::generate_orbits_by_attributes;
use tracing::debug;

use crate::grid::Grid;
use crate::oracle::rotational_cycles;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "generation";

/// `C(n, k)` for the small arguments of a grid.
pub fn binomial(n: u64, k: u64) -> u64 {
    (1..=k).fold(1, |acc, i| acc * (n + 1 - i) / i)
}

/// Runs the generation checks over `grid`.
///
/// # Errors
///
/// Returns an error if the oracle cannot enumerate a cycle family.
pub fn validate(grid: &Grid) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let cases = grid.cases();
    let mut failures = Vec::new();

    for &(sigma, rotation) in &cases {
        let orbits = match generate_orbits_by_attributes(sigma, rotation) {
            Ok(orbits) => orbits,
            Err(e) => {
                failures.push(format!("sigma {sigma}, {rotation}: {e}"));
                continue;
            }
        };
        let expected_count =
            binomial(rotation.denominator() + u64::from(sigma) - 2, u64::from(sigma) - 2);
        if orbits.len() as u64 != expected_count {
            failures.push(format!(
                "sigma {sigma}, {rotation}: {} orbits, expected {expected_count}",
                orbits.len()
            ));
        }
        if let Some(bad) = orbits
            .iter()
            .find(|o| o.rotational_number() != Some(rotation))
        {
            failures.push(format!(
                "sigma {sigma}, {rotation}: {bad} has type {:?}",
                bad.rotational_number()
            ));
        }
        let generated: BTreeSet<String> = orbits.iter().map(|o| o.point().to_string()).collect();
        let scanned: BTreeSet<String> = rotational_cycles(sigma, rotation)?
            .iter()
            .map(|o| o.point().to_string())
            .collect();
        if generated != scanned {
            failures.push(format!(
                "sigma {sigma}, {rotation}: generated {generated:?}, oracle {scanned:?}"
            ));
        }
        debug!(sigma, %rotation, orbits = orbits.len(), "generation checked");
    }

    report.push(TestResult::from_mismatches(
        VALIDATOR,
        cases.len(),
        "rotation types",
        failures,
    ));
    Ok(report)
}
