//! Pre-image placement: direct construction of every orbit set.
//!
//! A maximal set of type `p/q` over σ digits has σ − 1 members, one per
//! column. Column `c` carries a row `r_c ∈ [0, q)`, the position in the
//! sorted cycle where the digit boundary of that member falls. The first
//! σ − 2 rows are free and the last is forced, so the maximal sets are
//! counted by a mixed-radix counter with `q^(σ-2)` states.
//!
//! Member `c` reads, at sorted position `s`, the number of columns whose
//! boundary lies strictly before `s` (ties broken by column order), and
//! its itinerary visits the sorted positions with stride `p`.
//!
//! Subsets come from dropping columns. Several maximal sets share a
//! subset; only the parent whose rows are canonical around the kept
//! columns emits it, so every subset appears exactly once.

use tracing::{debug, trace};

use super::OrbitSet;
use crate::core::constants::is_admissible_sigma;
use crate::core::point::Point;
use crate::core::ring::circle_modulus;
use crate::core::rotation::RotationNumber;
use crate::error::{OrbitError, Result};
use crate::orbit::Orbit;

/// Row assignments of one maximal set.
pub(crate) type Placement = Vec<usize>;

/// Mixed-radix counter over the free rows, yielding full placements with
/// the forced last row appended.
#[derive(Debug, Clone)]
pub(crate) struct PlacementCounter {
    free: Vec<usize>,
    radix: usize,
    forced: usize,
    done: bool,
}

impl PlacementCounter {
    pub(crate) fn new(columns: usize, rotation: RotationNumber) -> Self {
        let q = rotation.denominator() as usize;
        let p = rotation.numerator() as usize;
        Self {
            free: vec![0; columns.saturating_sub(1)],
            radix: q,
            forced: (2 * q - p - 1) % q,
            done: columns == 0,
        }
    }
}

impl Iterator for PlacementCounter {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.done {
            return None;
        }
        let mut rows = self.free.clone();
        rows.push(self.forced);

        self.done = true;
        for slot in self.free.iter_mut().rev() {
            *slot += 1;
            if *slot < self.radix {
                self.done = false;
                break;
            }
            *slot = 0;
        }
        Some(rows)
    }
}

/// Digit strings of the members of the maximal set encoded by `rows`,
/// indexed by column.
fn member_points(rows: &[usize], rotation: RotationNumber) -> Result<Vec<Point>> {
    let q = rotation.denominator() as usize;
    let p = rotation.numerator() as usize;
    rows.iter()
        .enumerate()
        .map(|(column, _)| {
            let by_position: Vec<u8> = (0..q)
                .map(|s| {
                    rows.iter()
                        .enumerate()
                        .filter(|&(other, &row)| row < s || (row == s && other < column))
                        .count() as u8
                })
                .collect();
            let digits = (0..q).map(|t| by_position[(t * p) % q]).collect();
            Point::from_digits(digits)
        })
        .collect()
}

fn member_orbits(rows: &[usize], rotation: RotationNumber, sigma: u32) -> Result<Vec<Orbit>> {
    member_points(rows, rotation)?
        .iter()
        .map(|point| Orbit::new(point, sigma))
        .collect()
}

/// Whether `rows` is the canonical parent of the subset keeping the
/// (ascending) columns `kept`.
///
/// Rows ahead of the first kept column must be zero, rows between two kept
/// columns must be nondecreasing, and so must the rows after the last kept
/// column up to the forced one.
pub(crate) fn is_canonical(rows: &[usize], kept: &[usize]) -> bool {
    let (Some(&first), Some(&last)) = (kept.first(), kept.last()) else {
        return false;
    };
    let ascending = |block: &[usize]| block.windows(2).all(|w| w[0] <= w[1]);
    rows[..first].iter().all(|&r| r == 0)
        && kept.windows(2).all(|w| ascending(&rows[w[0]..w[1]]))
        && ascending(&rows[last..rows.len() - 1])
}

/// Emits every canonical subset of `kept`, dropping columns in ascending
/// order so each subset is visited once.
fn derive_subsets(
    rows: &[usize],
    orbits: &[Orbit],
    kept: &mut Vec<usize>,
    start: usize,
    out: &mut Vec<OrbitSet>,
) -> Result<()> {
    if is_canonical(rows, kept) {
        out.push(OrbitSet::new(
            kept.iter().map(|&column| orbits[column].clone()).collect(),
        )?);
    } else {
        trace!(?rows, ?kept, "skipping non-canonical subset");
    }
    if kept.len() == 1 {
        return Ok(());
    }
    for index in 0..kept.len() {
        let column = kept[index];
        if column < start {
            continue;
        }
        kept.remove(index);
        derive_subsets(rows, orbits, kept, column + 1, out)?;
        kept.insert(index, column);
    }
    Ok(())
}

fn validate(sigma: u32, rotation: RotationNumber) -> Result<()> {
    if !is_admissible_sigma(sigma) {
        return Err(OrbitError::InvalidSigma { sigma });
    }
    rotation.ensure_generable()?;
    circle_modulus(sigma, rotation.denominator() as usize)?;
    Ok(())
}

/// Every orbit set of type `rotation`, unsorted.
pub(super) fn enumerate(sigma: u32, rotation: RotationNumber) -> Result<Vec<OrbitSet>> {
    validate(sigma, rotation)?;
    let columns = sigma as usize - 1;
    let mut out = Vec::new();
    let mut placements = 0usize;
    for rows in PlacementCounter::new(columns, rotation) {
        let orbits = member_orbits(&rows, rotation, sigma)?;
        let mut kept: Vec<usize> = (0..columns).collect();
        derive_subsets(&rows, &orbits, &mut kept, 0, &mut out)?;
        placements += 1;
    }
    debug!(sigma, %rotation, placements, sets = out.len(), "pre-image placement done");
    Ok(out)
}

/// Lazily yields the maximal orbit sets (σ − 1 members each) of type
/// `rotation`, one per placement.
///
/// # Errors
///
/// Fails up front with the validation errors of
/// [`generate_orbit_sets_by_attributes`](super::generate_orbit_sets_by_attributes);
/// items carry construction errors.
///
/// # Example
///
/// ```
/// use rotation_orbits::{maximal_orbit_sets, RotationNumber};
///
/// let third = RotationNumber::new(1, 3).unwrap();
/// let maximal: Vec<_> = maximal_orbit_sets(4, third)
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(maximal.len(), 9);
/// assert!(maximal.iter().all(|s| s.cardinality() == 3 && s.is_rotational()));
/// ```
pub fn maximal_orbit_sets(sigma: u32, rotation: RotationNumber) -> Result<MaximalOrbitSets> {
    validate(sigma, rotation)?;
    Ok(MaximalOrbitSets {
        sigma,
        rotation,
        placements: PlacementCounter::new(sigma as usize - 1, rotation),
    })
}

/// Iterator returned by [`maximal_orbit_sets`].
#[derive(Debug, Clone)]
pub struct MaximalOrbitSets {
    sigma: u32,
    rotation: RotationNumber,
    placements: PlacementCounter,
}

impl Iterator for MaximalOrbitSets {
    type Item = Result<OrbitSet>;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = self.placements.next()?;
        Some(member_orbits(&rows, self.rotation, self.sigma).and_then(OrbitSet::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rot(p: u64, q: u64) -> RotationNumber {
        RotationNumber::new(p, q).unwrap()
    }

    #[test]
    fn test_counter_order() {
        let rows: Vec<_> = PlacementCounter::new(3, rot(1, 2)).collect();
        assert_eq!(
            rows,
            vec![vec![0, 0, 0], vec![0, 1, 0], vec![1, 0, 0], vec![1, 1, 0]]
        );
        let rows: Vec<_> = PlacementCounter::new(1, rot(1, 1)).collect();
        assert_eq!(rows, vec![vec![0]]);
    }

    #[test]
    fn test_forced_row() {
        let last = |p, q| *PlacementCounter::new(2, rot(p, q)).next().unwrap().last().unwrap();
        assert_eq!(last(1, 2), 0);
        assert_eq!(last(1, 3), 1);
        assert_eq!(last(2, 5), 2);
        assert_eq!(last(1, 1), 0);
    }

    #[test]
    fn test_member_points() {
        let points: Vec<String> = member_points(&[0, 0], rot(1, 2))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(points, ["02", "12"]);
        let points: Vec<String> = member_points(&[1, 0], rot(1, 2))
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(points, ["01", "02"]);
    }

    #[test]
    fn test_canonical_rule() {
        assert!(is_canonical(&[1, 0, 0], &[0, 1, 2]));
        assert!(!is_canonical(&[1, 0, 0], &[1, 2]));
        assert!(is_canonical(&[0, 1, 0], &[0]));
        assert!(!is_canonical(&[1, 0, 0], &[0]));
        assert!(!is_canonical(&[0, 0], &[]));
    }

    #[test]
    fn test_maximal_count() {
        for (sigma, p, q) in [(3, 1, 2), (4, 1, 3), (4, 2, 5), (5, 1, 2)] {
            let maximal: Vec<_> = maximal_orbit_sets(sigma, rot(p, q))
                .unwrap()
                .collect::<Result<_>>()
                .unwrap();
            assert_eq!(maximal.len(), (q as usize).pow(sigma - 2));
            assert!(maximal
                .iter()
                .all(|s| s.cardinality() == sigma as usize - 1 && s.is_rotational()));
        }
    }

    #[test]
    fn test_validation() {
        assert!(maximal_orbit_sets(1, rot(1, 2)).is_err());
        assert!(maximal_orbit_sets(3, rot(2, 4)).is_err());
    }
}
