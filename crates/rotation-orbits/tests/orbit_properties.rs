//! Property-based tests for the arithmetic and orbit layers.
//!
//! Digit strings are drawn over small alphabets so that every generated
//! period stays well inside 64-bit arithmetic.

use std::collections::HashSet;

use proptest::prelude::*;
use rotation_orbits::ring::circle_modulus;
use rotation_orbits::{Fraction, Orbit, OrbitError, OrbitSet, Point, RotationNumber};

fn sigma_and_digits() -> impl Strategy<Value = (u32, Vec<u8>)> {
    (2u32..=6).prop_flat_map(|sigma| {
        (
            Just(sigma),
            prop::collection::vec(0..sigma as u8, 1..=8),
        )
    })
}

fn point(digits: Vec<u8>) -> Point {
    Point::from_digits(digits).unwrap()
}

// =============================================================================
// Point <-> Fraction
// =============================================================================

proptest! {
    /// from_fraction(to_fraction(p)) names the same circle point
    #[test]
    fn prop_point_fraction_roundtrip((sigma, digits) in sigma_and_digits()) {
        let p = point(digits);
        let f = p.to_fraction(sigma).unwrap();
        let back = Point::from_fraction(&f, sigma).unwrap();
        prop_assert_eq!(back.to_fraction(sigma).unwrap().reduced(), f.reduced());
        prop_assert_eq!(p.len() % back.len(), 0, "{} is not a root of {}", back, p);
    }

    /// The shortest spelling repeated recovers the original, unless the
    /// original is all (σ-1) digits and wraps to zero
    #[test]
    fn prop_minimal_spelling_repeats((sigma, digits) in sigma_and_digits()) {
        let p = point(digits.clone());
        prop_assume!(digits.iter().any(|&d| u32::from(d) != sigma - 1));
        let back = Point::from_fraction(&p.to_fraction(sigma).unwrap(), sigma).unwrap();
        let repeated: Vec<u8> = back.digits().iter().copied().cycle().take(p.len()).collect();
        prop_assert_eq!(repeated, digits);
    }

    /// Denominator is σ^L - 1
    #[test]
    fn prop_denominator_is_circle_modulus((sigma, digits) in sigma_and_digits()) {
        let len = digits.len();
        let f = point(digits).to_fraction(sigma).unwrap();
        prop_assert_eq!(f.denominator(), circle_modulus(sigma, len).unwrap());
    }
}

// =============================================================================
// Fraction
// =============================================================================

proptest! {
    /// Forward distances in both directions sum to a full turn
    #[test]
    fn prop_distance_complements(q in 2u64..10_000, a in any::<u64>(), b in any::<u64>()) {
        let x = Fraction::new(a, q).unwrap();
        let y = Fraction::new(b, q).unwrap();
        let there = x.distance_to(&y).unwrap().numerator();
        let back = y.distance_to(&x).unwrap().numerator();
        prop_assert_eq!((there + back) % q, 0);
    }

    /// Mismatched denominators are always rejected
    #[test]
    fn prop_mismatch_rejected(
        q in 1u64..10_000,
        r in 1u64..10_000,
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        prop_assume!(q != r);
        let x = Fraction::new(a, q).unwrap();
        let y = Fraction::new(b, r).unwrap();
        let expected = OrbitError::IncompatibleDenominator { left: q, right: r };
        prop_assert_eq!(x.compare_to(&y), Err(expected.clone()));
        prop_assert_eq!(x.distance_to(&y), Err(expected));
    }

    /// next(σ) is multiply(σ)
    #[test]
    fn prop_next_is_multiply(q in 1u64..1_000_000, a in any::<u64>(), sigma in 2u32..=36) {
        let x = Fraction::new(a, q).unwrap();
        prop_assert_eq!(x.next(sigma), x.multiply(u64::from(sigma)));
        prop_assert!(x.next(sigma).numerator() < q);
    }
}

// =============================================================================
// Orbit
// =============================================================================

proptest! {
    /// Cycle is duplicate-free, minimum first, over σ^period - 1
    #[test]
    fn prop_orbit_invariants((sigma, digits) in sigma_and_digits()) {
        let orbit = Orbit::new(&point(digits.clone()), sigma).unwrap();
        let fractions = orbit.fractions();
        let distinct: HashSet<_> = fractions.iter().collect();
        prop_assert_eq!(distinct.len(), fractions.len());
        prop_assert!(fractions.iter().all(|f| f.numerator() >= fractions[0].numerator()));
        let modulus = circle_modulus(sigma, orbit.period()).unwrap();
        prop_assert!(fractions.iter().all(|f| f.denominator() == modulus));
        prop_assert_eq!(digits.len() % orbit.period(), 0);
        prop_assert_eq!(orbit.point().len(), orbit.period());
    }

    /// Each step of the cycle is the circle map
    #[test]
    fn prop_orbit_is_forward_cycle((sigma, digits) in sigma_and_digits()) {
        let orbit = Orbit::new(&point(digits), sigma).unwrap();
        let fractions = orbit.fractions();
        for (i, f) in fractions.iter().enumerate() {
            prop_assert_eq!(f.next(sigma), fractions[(i + 1) % fractions.len()]);
        }
    }

    /// Every spelling of a cycle point gives the same orbit
    #[test]
    fn prop_orbit_rotation_invariant((sigma, digits) in sigma_and_digits(), shift in 0usize..8) {
        let mut rotated = digits.clone();
        let len = rotated.len();
        rotated.rotate_left(shift % len);
        let a = Orbit::new(&point(digits), sigma).unwrap();
        let b = Orbit::new(&point(rotated), sigma).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Fixed points are rotational of type 1/1
    #[test]
    fn prop_fixed_points(sigma in 2u32..=36, digit in 0u8..36) {
        prop_assume!(u32::from(digit) < sigma);
        let orbit = Orbit::new(&point(vec![digit]), sigma).unwrap();
        prop_assert_eq!(orbit.period(), 1);
        prop_assert!(orbit.is_rotational());
        prop_assert_eq!(orbit.rotational_number(), Some(RotationNumber::FIXED));
    }

    /// Rotational orbits carry a number whose denominator is the period
    #[test]
    fn prop_rotational_number_denominator((sigma, digits) in sigma_and_digits()) {
        let orbit = Orbit::new(&point(digits), sigma).unwrap();
        match orbit.rotational_number() {
            Some(r) => {
                prop_assert!(orbit.is_rotational());
                prop_assert_eq!(r.denominator() as usize, orbit.period());
            }
            None => prop_assert!(!orbit.is_rotational()),
        }
    }
}

// =============================================================================
// OrbitSet
// =============================================================================

proptest! {
    /// add_orbit leaves its receiver untouched
    #[test]
    fn prop_add_orbit_non_mutating(
        (sigma, a) in sigma_and_digits(),
        extra in prop::collection::vec(0u8..2, 1..=8),
    ) {
        let first = Orbit::new(&point(a), sigma).unwrap();
        let other = Orbit::new(&point(extra), sigma).unwrap();
        let set = OrbitSet::new(vec![first]).unwrap();
        let before = set.clone();
        let grown = set.add_orbit(other.clone()).unwrap();
        prop_assert_eq!(&set, &before);
        prop_assert_eq!(set.is_rotational(), before.is_rotational());
        prop_assert!(grown.contains(&other));
    }

    /// A singleton set agrees with its only orbit
    #[test]
    fn prop_singleton_matches_orbit((sigma, digits) in sigma_and_digits()) {
        let orbit = Orbit::new(&point(digits), sigma).unwrap();
        let set = OrbitSet::new(vec![orbit.clone()]).unwrap();
        prop_assert_eq!(set.is_rotational(), orbit.is_rotational());
        prop_assert_eq!(set.rotational_number(), orbit.rotational_number());
    }
}
