//! Rotational predicate validator.
//!
//! Compares the engine's critical-length test with the oracle for every
//! primitive cycle in the grid, for unions of rotational cycles of one
//! period, and for unions mixing periods.

use anyhow::Result;
use rotation_orbits::{Orbit, OrbitSet};
use tracing::debug;

use crate::grid::Grid;
use crate::oracle::{cycles, for_each_subset, is_rotational_union};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "predicate";

/// Runs the predicate checks over `grid`.
///
/// # Errors
///
/// Returns an error if the oracle cannot enumerate a cycle family.
pub fn validate(grid: &Grid) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let max_period = usize::try_from(grid.max_period)?;

    for sigma in grid.sigmas() {
        let mut singles = 0;
        let mut single_mismatches = Vec::new();
        let mut unions = 0;
        let mut union_mismatches = Vec::new();
        let mut fixed_points: Vec<Orbit> = Vec::new();
        let mut two_cycles: Vec<Orbit> = Vec::new();

        for period in 1..=max_period {
            let family = cycles(sigma, period)?;
            for orbit in &family {
                singles += 1;
                if orbit.is_rotational() != is_rotational_union(&[orbit]) {
                    single_mismatches.push(format!("{orbit} (sigma {sigma})"));
                }
            }

            let rotational: Vec<Orbit> = family.into_iter().filter(Orbit::is_rotational).collect();
            for_each_subset(rotational.len(), grid.max_union, |indices| {
                if indices.len() < 2 {
                    return;
                }
                let chosen: Vec<&Orbit> = indices.iter().map(|&i| &rotational[i]).collect();
                unions += 1;
                check_union(&chosen, sigma, &mut union_mismatches);
            });
            match period {
                1 => fixed_points = rotational,
                2 => two_cycles = rotational,
                _ => {}
            }
        }

        let mut mixed_mismatches = Vec::new();
        for fixed in &fixed_points {
            for cycle in &two_cycles {
                check_union(&[fixed, cycle], sigma, &mut mixed_mismatches);
            }
        }
        let mixed = fixed_points.len() * two_cycles.len();

        debug!(sigma, singles, unions, mixed, "predicate checks");
        report.push(TestResult::from_mismatches(
            VALIDATOR,
            singles,
            &format!("single cycles at sigma {sigma}"),
            single_mismatches,
        ));
        report.push(TestResult::from_mismatches(
            VALIDATOR,
            unions,
            &format!("same-period unions at sigma {sigma}"),
            union_mismatches,
        ));
        if mixed > 0 {
            report.push(TestResult::from_mismatches(
                VALIDATOR,
                mixed,
                &format!("mixed-period unions at sigma {sigma}"),
                mixed_mismatches,
            ));
        }
    }

    Ok(report)
}

fn check_union(chosen: &[&Orbit], sigma: u32, mismatches: &mut Vec<String>) {
    let expected = is_rotational_union(chosen);
    match OrbitSet::new(chosen.iter().map(|&o| o.clone()).collect()) {
        Ok(set) if set.is_rotational() == expected => {}
        Ok(set) => mismatches.push(format!("{set} (sigma {sigma}): oracle says {expected}")),
        Err(e) => mismatches.push(format!("union at sigma {sigma}: {e}")),
    }
}
