//! Integer helpers for the canonical denominators `σ^L - 1`.
//!
//! The circle map `x ↦ σx (mod 1)` acts on points of period `L` as
//! multiplication by `σ` in the ring ℤ/(σ^L − 1)ℤ. Products are formed in
//! `u128` so that every numerator below a 64-bit denominator stays exact.

use crate::error::{OrbitError, Result};

/// Greatest common divisor.
///
/// # Example
///
/// ```
/// use rotation_orbits::ring::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// assert_eq!(gcd(5, 0), 5);
/// ```
#[inline]
#[must_use]
pub const fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple of two periods, `None` on overflow.
///
/// # Example
///
/// ```
/// use rotation_orbits::ring::lcm;
///
/// assert_eq!(lcm(4, 6), Some(12));
/// assert_eq!(lcm(1, 5), Some(5));
/// ```
#[inline]
#[must_use]
pub fn lcm(a: usize, b: usize) -> Option<usize> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd(a as u64, b as u64) as usize;
    (a / g).checked_mul(b)
}

/// The canonical denominator `σ^period - 1`.
///
/// # Errors
///
/// Returns [`OrbitError::PeriodOverflow`] if `σ^period` does not fit in a
/// `u64`.
///
/// # Example
///
/// ```
/// use rotation_orbits::ring::circle_modulus;
///
/// assert_eq!(circle_modulus(2, 3).unwrap(), 7);
/// assert_eq!(circle_modulus(3, 2).unwrap(), 8);
/// assert!(circle_modulus(2, 64).is_err());
/// ```
pub fn circle_modulus(sigma: u32, period: usize) -> Result<u64> {
    let exp = u32::try_from(period).map_err(|_| OrbitError::PeriodOverflow { sigma, period })?;
    u64::from(sigma)
        .checked_pow(exp)
        .map(|power| power - 1)
        .ok_or(OrbitError::PeriodOverflow { sigma, period })
}

/// `(a * b) mod m` without intermediate overflow. `m` must be non-zero.
#[inline]
#[must_use]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_coprime() {
        assert_eq!(gcd(2, 5), 1);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(1, 1), 1);
    }

    #[test]
    fn test_circle_modulus_small() {
        assert_eq!(circle_modulus(2, 1).unwrap(), 1);
        assert_eq!(circle_modulus(3, 1).unwrap(), 2);
        assert_eq!(circle_modulus(10, 2).unwrap(), 99);
        assert_eq!(circle_modulus(2, 63).unwrap(), (1u64 << 63) - 1);
    }

    #[test]
    fn test_circle_modulus_overflow() {
        assert_eq!(
            circle_modulus(10, 20),
            Err(OrbitError::PeriodOverflow {
                sigma: 10,
                period: 20
            })
        );
    }

    #[test]
    fn test_mul_mod_wide() {
        let m = u64::MAX - 58;
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);
    }
}
