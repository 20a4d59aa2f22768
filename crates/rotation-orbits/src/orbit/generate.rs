//! Attribute-driven orbit generation.
//!
//! Every rotational cycle of type `p/q` over σ digits is reached from the
//! binary seed of that type by bumping digits along a fixed stride, the
//! jump. Growth proceeds one alphabet size at a time; the orbits of σ
//! digits number `C(q + σ - 2, σ - 2)`.

use tracing::{debug, trace};

use super::Orbit;
use crate::core::constants::{is_admissible_sigma, JUMP_PROBE_SIGMA, MIN_SIGMA};
use crate::core::point::Point;
use crate::core::ring::circle_modulus;
use crate::core::rotation::RotationNumber;
use crate::error::{OrbitError, Result};

/// Generates every orbit of rotation type `rotation` over `sigma` digits.
///
/// # Errors
///
/// - [`OrbitError::InvalidSigma`] if `sigma` is not admissible
/// - [`OrbitError::NonSimplifiedRotationalNumber`] if `p != 1` and `p/q`
///   is not in lowest terms
/// - [`OrbitError::JumpNotFound`] if no digit of the seed can be bumped
///   into a rotational orbit
/// - [`OrbitError::PeriodOverflow`] if `σ^q` exceeds 64 bits
///
/// # Example
///
/// ```
/// use rotation_orbits::{generate_orbits_by_attributes, RotationNumber};
///
/// let half = RotationNumber::new(1, 2).unwrap();
/// let orbits = generate_orbits_by_attributes(3, half).unwrap();
/// let points: Vec<String> = orbits.iter().map(|o| o.point().to_string()).collect();
/// assert_eq!(points, ["01", "02", "12"]);
/// assert!(orbits.iter().all(|o| o.rotational_number() == Some(half)));
/// ```
pub fn generate_orbits_by_attributes(sigma: u32, rotation: RotationNumber) -> Result<Vec<Orbit>> {
    if !is_admissible_sigma(sigma) {
        return Err(OrbitError::InvalidSigma { sigma });
    }
    rotation.ensure_generable()?;

    let period = usize::try_from(rotation.denominator()).map_err(|_| OrbitError::PeriodOverflow {
        sigma,
        period: usize::MAX,
    })?;
    circle_modulus(sigma, period)?;
    let seed = binary_seed(rotation)?;
    let jump = find_jump(&seed, rotation)?;
    debug!(sigma, %rotation, %seed, jump, "generating orbits");

    let mut points = vec![seed.clone()];
    if sigma > MIN_SIGMA {
        let mut groups = vec![bump_run(&seed, jump, period, period)];
        points.extend(groups[0].iter().cloned());
        for round in JUMP_PROBE_SIGMA + 1..=sigma {
            let mut next = Vec::new();
            for group in &groups {
                for (rank, start) in group.iter().enumerate().rev() {
                    next.push(bump_run(start, jump, period, rank + 1));
                }
            }
            points.extend(next.iter().flatten().cloned());
            debug!(round, groups = next.len(), points = points.len(), "grew alphabet");
            groups = next;
        }
    }

    let mut orbits = points
        .iter()
        .map(|p| Orbit::new(p, sigma))
        .collect::<Result<Vec<_>>>()?;
    orbits.sort_by(|a, b| a.min_fraction().cmp_value(&b.min_fraction()));
    orbits.dedup();
    Ok(orbits)
}

/// The binary itinerary of `p/q`: `q - p` zeros then `p` ones, read with
/// stride `p`.
fn binary_seed(rotation: RotationNumber) -> Result<Point> {
    let q = rotation.denominator();
    let p = rotation.numerator();
    let digits = (0..q)
        .map(|i| u8::from((i * p) % q >= q - p))
        .collect();
    Point::from_digits(digits)
}

/// First position of a `1` whose bump yields a rotational orbit over
/// three digits. Position zero is a valid jump.
fn find_jump(seed: &Point, rotation: RotationNumber) -> Result<usize> {
    for (index, &digit) in seed.digits().iter().enumerate() {
        if digit != 1 {
            continue;
        }
        let probe = Orbit::new(&seed.bump_digit(index), JUMP_PROBE_SIGMA)?;
        trace!(index, probe = %probe.point(), rotational = probe.is_rotational(), "jump probe");
        if probe.is_rotational() {
            return Ok(index);
        }
    }
    Err(OrbitError::JumpNotFound {
        numerator: rotation.numerator(),
        denominator: rotation.denominator(),
    })
}

/// `count` successive bumps of `start`, the cursor advancing by `jump`
/// after each one. Every intermediate string is kept.
fn bump_run(start: &Point, jump: usize, period: usize, count: usize) -> Vec<Point> {
    let mut run = Vec::with_capacity(count);
    let mut current = start.clone();
    let mut cursor = jump;
    for _ in 0..count {
        current = current.bump_digit(cursor);
        cursor = (cursor + jump) % period;
        run.push(current.clone());
    }
    run
}
