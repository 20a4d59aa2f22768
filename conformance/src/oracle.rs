//! Brute-force reference for the rotational property.
//!
//! A union of cycles is rotational exactly when the circle map, restricted
//! to the union's points, is a cyclic shift of their sorted order. Cycles
//! are found by scanning every digit string of a given length.

use std::collections::BTreeSet;

use anyhow::Result;
use rotation_orbits::{find_rotational_number, Fraction, Orbit, Point, RotationNumber};

/// Decides the rotational property of a union directly from the cyclic
/// order of its points. Unions of different periods are never rotational.
pub fn is_rotational_union(orbits: &[&Orbit]) -> bool {
    let Some(first) = orbits.first() else {
        return false;
    };
    let sigma = first.sigma();
    if orbits.iter().any(|o| o.period() != first.period()) {
        return false;
    }
    let points: Vec<Fraction> = orbits
        .iter()
        .flat_map(|o| o.fractions().iter().copied())
        .collect();
    let mut sorted: Vec<u64> = points.iter().map(Fraction::numerator).collect();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != points.len() {
        return false;
    }

    let n = sorted.len();
    let rank = |x: u64| sorted.binary_search(&x).ok();
    let mut shift = None;
    for f in &points {
        let (Some(from), Some(to)) = (rank(f.numerator()), rank(f.next(sigma).numerator())) else {
            return false;
        };
        let step = (to + n - from) % n;
        match shift {
            None => shift = Some(step),
            Some(s) if s != step => return false,
            Some(_) => {}
        }
    }
    true
}

/// Every primitive cycle of period `period` over `sigma` digits, each
/// once, in ascending order of canonical spelling.
///
/// # Errors
///
/// Propagates engine errors (e.g. period overflow).
pub fn cycles(sigma: u32, period: usize) -> Result<Vec<Orbit>> {
    let base = u64::from(sigma);
    let count = base
        .checked_pow(u32::try_from(period)?)
        .ok_or_else(|| anyhow::anyhow!("sigma {sigma} with period {period} is too large"))?;
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for code in 0..count {
        let mut digits = vec![0u8; period];
        let mut rest = code;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % base) as u8;
            rest /= base;
        }
        let orbit = Orbit::new(&Point::from_digits(digits)?, sigma)?;
        if orbit.period() == period && seen.insert(orbit.point().clone()) {
            out.push(orbit);
        }
    }
    out.sort_by(|a, b| a.point().cmp(b.point()));
    Ok(out)
}

/// Every cycle of rotation type `rotation`, per the oracle.
///
/// # Errors
///
/// Propagates engine errors.
pub fn rotational_cycles(sigma: u32, rotation: RotationNumber) -> Result<Vec<Orbit>> {
    let mut out = Vec::new();
    for orbit in cycles(sigma, usize::try_from(rotation.denominator())?)? {
        if is_rotational_union(&[&orbit]) && find_rotational_number(orbit.fractions())? == rotation {
            out.push(orbit);
        }
    }
    Ok(out)
}

/// Every rotational union of at most `max_union` cycles of type
/// `rotation`, each as its sorted member spellings.
///
/// # Errors
///
/// Propagates engine errors.
pub fn rotational_unions(
    sigma: u32,
    rotation: RotationNumber,
    max_union: usize,
) -> Result<BTreeSet<Vec<String>>> {
    let cycles = rotational_cycles(sigma, rotation)?;
    let mut out = BTreeSet::new();
    for_each_subset(cycles.len(), max_union, |indices| {
        let chosen: Vec<&Orbit> = indices.iter().map(|&i| &cycles[i]).collect();
        if is_rotational_union(&chosen) {
            let mut key: Vec<String> = chosen.iter().map(|o| o.point().to_string()).collect();
            key.sort();
            out.insert(key);
        }
    });
    Ok(out)
}

/// Calls `visit` on every non-empty index subset of `0..n` with at most
/// `max_len` elements, indices ascending.
pub fn for_each_subset(n: usize, max_len: usize, mut visit: impl FnMut(&[usize])) {
    fn walk(
        n: usize,
        max_len: usize,
        start: usize,
        current: &mut Vec<usize>,
        visit: &mut dyn FnMut(&[usize]),
    ) {
        for i in start..n {
            current.push(i);
            visit(current.as_slice());
            if current.len() < max_len {
                walk(n, max_len, i + 1, current, visit);
            }
            current.pop();
        }
    }
    walk(n, max_len, 0, &mut Vec::new(), &mut visit);
}
