//! Known-value validator.

use rotation_orbits::api::{build_orbit, build_orbit_set};
use rotation_orbits::RotationNumber;

use crate::fixtures::{KNOWN_ORBITS, KNOWN_UNIONS};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "fixtures";

/// Checks the hand-checked orbits and unions.
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut mismatches = Vec::new();
    for &(digits, sigma, expected) in KNOWN_ORBITS {
        let expected = expected.and_then(|(p, q)| RotationNumber::new(p, q).ok());
        match build_orbit(digits, Some(sigma)) {
            Ok(orbit) if orbit.rotational_number() == expected => {}
            Ok(orbit) => mismatches.push(format!(
                "{digits} (sigma {sigma}): expected {expected:?}, got {:?}",
                orbit.rotational_number()
            )),
            Err(e) => mismatches.push(format!("{digits} (sigma {sigma}): {e}")),
        }
    }
    report.push(TestResult::from_mismatches(
        VALIDATOR,
        KNOWN_ORBITS.len(),
        "known orbits",
        mismatches,
    ));

    let mut mismatches = Vec::new();
    for &(points, sigma, expected) in KNOWN_UNIONS {
        match build_orbit_set(points, Some(sigma)) {
            Ok(set) if set.is_rotational() == expected => {}
            Ok(set) => mismatches.push(format!("{set} (sigma {sigma}): expected {expected}")),
            Err(e) => mismatches.push(format!("{points:?} (sigma {sigma}): {e}")),
        }
    }
    report.push(TestResult::from_mismatches(
        VALIDATOR,
        KNOWN_UNIONS.len(),
        "known unions",
        mismatches,
    ));

    report
}
