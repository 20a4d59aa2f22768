//! Orbit-set enumeration validator.
//!
//! Both strategies must return identical lists; the list must be
//! duplicate-free, grouped by cardinality, contain `q^(σ-2)` maximal sets,
//! place every set inside some maximal set, and agree with the oracle's
//! rotational unions up to the grid's union size.

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;
use rotation_orbits::{
    generate_orbit_sets_with, maximal_orbit_sets, EnumerationStrategy, OrbitSet, RotationNumber,
};
use tracing::debug;

use crate::grid::Grid;
use crate::oracle::rotational_unions;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "enumeration";

/// Runs the enumeration checks over `grid`.
///
/// # Errors
///
/// Returns an error if the oracle cannot enumerate a cycle family.
pub fn validate(grid: &Grid) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let cases = grid.cases();
    let mut failures = Vec::new();

    for &(sigma, rotation) in &cases {
        match check_case(sigma, rotation, grid.max_union) {
            Ok(problems) => failures.extend(
                problems
                    .into_iter()
                    .map(|p| format!("sigma {sigma}, {rotation}: {p}")),
            ),
            Err(e) => failures.push(format!("sigma {sigma}, {rotation}: {e}")),
        }
    }

    report.push(TestResult::from_mismatches(
        VALIDATOR,
        cases.len(),
        "rotation types",
        failures,
    ));
    Ok(report)
}

fn check_case(sigma: u32, rotation: RotationNumber, max_union: usize) -> Result<Vec<String>> {
    let mut problems = Vec::new();
    let preimage = generate_orbit_sets_with(sigma, rotation, EnumerationStrategy::PreimagePlacement)?;
    let wiggle = generate_orbit_sets_with(sigma, rotation, EnumerationStrategy::WiggleInterval)?;
    if preimage != wiggle {
        problems.push(format!(
            "strategies disagree ({} vs {} sets)",
            preimage.len(),
            wiggle.len()
        ));
    }

    let keys: HashSet<String> = preimage.iter().map(OrbitSet::key).collect();
    if keys.len() != preimage.len() {
        problems.push(format!("{} duplicate sets", preimage.len() - keys.len()));
    }
    if preimage.windows(2).any(|w| w[0].cardinality() > w[1].cardinality()) {
        problems.push("sets not grouped by cardinality".to_owned());
    }

    let top = sigma as usize - 1;
    let maximal: Vec<&OrbitSet> = preimage.iter().filter(|s| s.cardinality() == top).collect();
    let expected = rotation.denominator().pow(sigma - 2);
    if maximal.len() as u64 != expected {
        problems.push(format!("{} maximal sets, expected {expected}", maximal.len()));
    }
    let lazy = maximal_orbit_sets(sigma, rotation)?.count();
    if lazy as u64 != expected {
        problems.push(format!("lazy iterator yields {lazy} maximal sets"));
    }
    for set in &preimage {
        if !maximal.iter().any(|m| set.orbits().iter().all(|o| m.contains(o))) {
            problems.push(format!("{set} lies in no maximal set"));
        }
    }

    let engine: BTreeSet<Vec<String>> = preimage
        .iter()
        .filter(|s| s.cardinality() <= max_union)
        .map(|s| {
            let mut key: Vec<String> = s.orbits().iter().map(|o| o.point().to_string()).collect();
            key.sort();
            key
        })
        .collect();
    let oracle = rotational_unions(sigma, rotation, max_union.min(top))?;
    if engine != oracle {
        let missing = oracle.difference(&engine).count();
        let extra = engine.difference(&oracle).count();
        problems.push(format!("{missing} oracle sets missing, {extra} extra sets"));
    }

    debug!(sigma, %rotation, sets = preimage.len(), "enumeration checked");
    Ok(problems)
}
