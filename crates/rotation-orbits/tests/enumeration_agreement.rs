//! Cross-checks of orbit generation and orbit-set enumeration.
//!
//! The reference is the definition itself: a union of cycles is rotational
//! iff the circle map sends its sorted points to themselves shifted by a
//! constant index. Every rotational cycle of type `p/q` is found by
//! scanning all `σ^q` digit strings.

use std::collections::{BTreeSet, HashSet};

use rotation_orbits::{
    generate_orbit_sets_by_attributes, generate_orbit_sets_with, generate_orbits_by_attributes,
    maximal_orbit_sets, EnumerationStrategy, Orbit, OrbitSet, Point, RotationNumber,
};

const GRID: &[(u32, u64, u64)] = &[
    (2, 1, 2),
    (2, 2, 5),
    (3, 1, 1),
    (3, 1, 2),
    (3, 1, 3),
    (3, 2, 3),
    (3, 3, 4),
    (3, 2, 5),
    (4, 1, 2),
    (4, 2, 3),
    (4, 1, 4),
    (5, 1, 2),
    (5, 1, 3),
];

fn rot(p: u64, q: u64) -> RotationNumber {
    RotationNumber::new(p, q).unwrap()
}

/// Sorted-order shift test over the union of the orbits' points.
fn oracle_rotational(orbits: &[&Orbit]) -> bool {
    let sigma = orbits[0].sigma();
    let points: Vec<_> = orbits.iter().flat_map(|o| o.fractions().iter().copied()).collect();
    let mut sorted: Vec<u64> = points.iter().map(|f| f.numerator()).collect();
    sorted.sort_unstable();
    let n = sorted.len();
    let position = |x: u64| sorted.binary_search(&x).unwrap();
    let images: Vec<usize> = points
        .iter()
        .map(|f| position(f.next(sigma).numerator()))
        .collect();
    let shift = (images[0] + n - position(points[0].numerator())) % n;
    points
        .iter()
        .zip(&images)
        .all(|(f, &img)| img == (position(f.numerator()) + shift) % n)
}

/// Every rotational cycle of type `p/q`, by exhaustive scan.
fn oracle_cycles(sigma: u32, r: RotationNumber) -> Vec<Orbit> {
    let q = r.denominator() as u32;
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for code in 0..u64::from(sigma).pow(q) {
        let mut digits = vec![0u8; q as usize];
        let mut rest = code;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % u64::from(sigma)) as u8;
            rest /= u64::from(sigma);
        }
        let orbit = Orbit::new(&Point::from_digits(digits).unwrap(), sigma).unwrap();
        if orbit.period() as u64 != r.denominator() || !oracle_rotational(&[&orbit]) {
            continue;
        }
        let number = rotation_orbits::find_rotational_number(orbit.fractions()).unwrap();
        if number == r && seen.insert(orbit.point().to_string()) {
            out.push(orbit);
        }
    }
    out
}

/// Every rotational union of oracle cycles, as sorted key lists.
fn oracle_sets(sigma: u32, r: RotationNumber) -> BTreeSet<Vec<String>> {
    let cycles = oracle_cycles(sigma, r);
    let mut out = BTreeSet::new();
    for mask in 1u32..(1 << cycles.len()) {
        if mask.count_ones() >= sigma {
            continue;
        }
        let chosen: Vec<&Orbit> = (0..cycles.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| &cycles[i])
            .collect();
        if oracle_rotational(&chosen) {
            let mut key: Vec<String> = chosen.iter().map(|o| o.point().to_string()).collect();
            key.sort();
            out.insert(key);
        }
    }
    out
}

fn sorted_keys(sets: &[OrbitSet]) -> BTreeSet<Vec<String>> {
    sets.iter()
        .map(|s| {
            let mut key: Vec<String> = s.orbits().iter().map(|o| o.point().to_string()).collect();
            key.sort();
            key
        })
        .collect()
}

#[test]
fn generated_orbits_match_exhaustive_scan() {
    for &(sigma, p, q) in GRID {
        let generated: BTreeSet<String> = generate_orbits_by_attributes(sigma, rot(p, q))
            .unwrap()
            .iter()
            .map(|o| o.point().to_string())
            .collect();
        let scanned: BTreeSet<String> = oracle_cycles(sigma, rot(p, q))
            .iter()
            .map(|o| o.point().to_string())
            .collect();
        assert_eq!(generated, scanned, "sigma {sigma}, {p}/{q}");
    }
}

#[test]
fn enumeration_matches_oracle() {
    for &(sigma, p, q) in GRID {
        let sets = generate_orbit_sets_by_attributes(sigma, rot(p, q)).unwrap();
        assert_eq!(sorted_keys(&sets), oracle_sets(sigma, rot(p, q)), "sigma {sigma}, {p}/{q}");
    }
}

#[test]
fn strategies_produce_identical_lists() {
    for &(sigma, p, q) in GRID {
        let preimage =
            generate_orbit_sets_with(sigma, rot(p, q), EnumerationStrategy::PreimagePlacement)
                .unwrap();
        let wiggle =
            generate_orbit_sets_with(sigma, rot(p, q), EnumerationStrategy::WiggleInterval).unwrap();
        assert_eq!(preimage, wiggle, "sigma {sigma}, {p}/{q}");
    }
}

#[test]
fn enumeration_is_duplicate_free_and_grouped() {
    for &(sigma, p, q) in GRID {
        let sets = generate_orbit_sets_by_attributes(sigma, rot(p, q)).unwrap();
        let keys: HashSet<String> = sets.iter().map(OrbitSet::key).collect();
        assert_eq!(keys.len(), sets.len(), "sigma {sigma}, {p}/{q}");
        assert!(sets.windows(2).all(|w| w[0].cardinality() <= w[1].cardinality()));
        assert!(sets
            .iter()
            .all(|s| s.is_rotational() && s.rotational_number() == Some(rot(p, q))));
    }
}

#[test]
fn smaller_sets_lie_inside_maximal_ones() {
    for &(sigma, p, q) in GRID {
        let sets = generate_orbit_sets_by_attributes(sigma, rot(p, q)).unwrap();
        let maximal: Vec<&OrbitSet> = sets
            .iter()
            .filter(|s| s.cardinality() == sigma as usize - 1)
            .collect();
        assert_eq!(maximal.len() as u64, q.pow(sigma - 2), "sigma {sigma}, {p}/{q}");
        for set in &sets {
            assert!(
                maximal
                    .iter()
                    .any(|m| set.orbits().iter().all(|o| m.contains(o))),
                "{set} has no maximal superset"
            );
        }
    }
}

#[test]
fn lazy_maximal_sets_match_enumeration() {
    for &(sigma, p, q) in GRID {
        let lazy: BTreeSet<String> = maximal_orbit_sets(sigma, rot(p, q))
            .unwrap()
            .map(|s| s.unwrap().key())
            .collect();
        let eager: BTreeSet<String> = generate_orbit_sets_by_attributes(sigma, rot(p, q))
            .unwrap()
            .iter()
            .filter(|s| s.cardinality() == sigma as usize - 1)
            .map(OrbitSet::key)
            .collect();
        assert_eq!(lazy, eager);
    }
}
