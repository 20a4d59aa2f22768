//! Wiggle-interval growth, the search-based enumeration.
//!
//! Sets grow one orbit per round. For a set, each cyclic gap between
//! consecutive member minima is cut into whole critical lengths followed by
//! a shorter wiggle tail, and every generated orbit whose minimum falls in
//! one of those pieces is tried as an extension. Growth stops when a round
//! adds no new set.

use std::collections::BTreeMap;
use std::ops::Range;

use tracing::{debug, trace};

use super::OrbitSet;
use crate::core::ring::circle_modulus;
use crate::core::rotation::RotationNumber;
use crate::error::Result;
use crate::orbit::{generate_orbits_by_attributes, Orbit};

/// Generated orbits keyed by the numerator of their minimal fraction.
type MinIndex = BTreeMap<u64, Orbit>;

/// Every orbit set of type `rotation`, unsorted.
pub(super) fn enumerate(sigma: u32, rotation: RotationNumber) -> Result<Vec<OrbitSet>> {
    let base = generate_orbits_by_attributes(sigma, rotation)?;
    let modulus = circle_modulus(sigma, rotation.denominator() as usize)?;
    let index: MinIndex = base
        .iter()
        .map(|o| (o.min_fraction().numerator(), o.clone()))
        .collect();

    let mut found = BTreeMap::new();
    let mut frontier = Vec::with_capacity(base.len());
    for orbit in base {
        let set = OrbitSet::new(vec![orbit])?;
        found.insert(set.key(), set.clone());
        frontier.push(set);
    }

    let mut round = 1usize;
    while !frontier.is_empty() {
        let mut grown_sets = BTreeMap::new();
        for set in &frontier {
            for candidate in extensions(set, &index, modulus, sigma) {
                let grown = set.add_orbit(candidate.clone())?;
                if !grown.is_rotational() {
                    trace!(set = %set, candidate = %candidate, "rejected extension");
                    continue;
                }
                let key = grown.key();
                if !found.contains_key(&key) {
                    grown_sets.entry(key).or_insert(grown);
                }
            }
        }
        debug!(round, frontier = frontier.len(), grown = grown_sets.len(), "wiggle round");
        frontier = grown_sets.values().cloned().collect();
        found.extend(grown_sets);
        round += 1;
    }
    Ok(found.into_values().collect())
}

/// Candidate orbits lying strictly inside the gaps of `set`.
fn extensions<'a>(set: &OrbitSet, index: &'a MinIndex, modulus: u64, sigma: u32) -> Vec<&'a Orbit> {
    let minima: Vec<u64> = set
        .orbits()
        .iter()
        .map(|o| o.min_fraction().numerator())
        .collect();
    let mut out = Vec::new();
    for (i, &start) in minima.iter().enumerate() {
        let end = minima[(i + 1) % minima.len()];
        let gap = match (end + modulus - start) % modulus {
            0 => modulus,
            g => g,
        };
        for offsets in gap_pieces(gap, modulus, sigma) {
            for range in circular_ranges(start, offsets, modulus) {
                out.extend(index.range(range).map(|(_, orbit)| orbit));
            }
        }
    }
    out
}

/// Splits the open gap `(0, gap)` into pieces one critical length
/// (`modulus / σ`) long; the last piece is the wiggle tail.
fn gap_pieces(gap: u64, modulus: u64, sigma: u32) -> Vec<Range<u64>> {
    let sigma = u128::from(sigma);
    let scaled_gap = u128::from(gap) * sigma;
    let whole = scaled_gap / u128::from(modulus);
    let wiggle = scaled_gap % u128::from(modulus);
    trace!(gap, critical_lengths = whole as u64, wiggle = wiggle as u64, "gap pieces");

    let boundary = |k: u128| (k * u128::from(modulus)).div_ceil(sigma) as u64;
    (0..=whole)
        .map(|k| boundary(k).max(1)..boundary(k + 1).min(gap))
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// The numerators `start + offsets` reduced mod `modulus`, split at the
/// wrap point.
fn circular_ranges(start: u64, offsets: Range<u64>, modulus: u64) -> Vec<Range<u64>> {
    let lo = (start + offsets.start) % modulus;
    let len = offsets.end - offsets.start;
    if lo + len <= modulus {
        vec![lo..lo + len]
    } else {
        vec![lo..modulus, 0..lo + len - modulus]
    }
}
