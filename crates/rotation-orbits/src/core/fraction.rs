//! Canonical rationals on the circle.
//!
//! A [`Fraction`] is a point of ℝ/ℤ written `p/q` with `0 <= p < q`. Within
//! any comparison context the denominator is fixed (it is `σ^L - 1` for
//! points of period `L`), so ordering and distances reduce to integer
//! arithmetic on numerators. Mixing denominators is an invariant violation
//! and is reported as [`OrbitError::IncompatibleDenominator`].

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use super::ring::{gcd, mul_mod};
use crate::error::{OrbitError, Result};

/// A point of the circle as an exact fraction `numerator / denominator`.
///
/// # Invariant
///
/// `0 <= numerator < denominator`. Constructors reduce the numerator
/// modulo the denominator.
///
/// # Example
///
/// ```
/// use rotation_orbits::Fraction;
///
/// let x = Fraction::new(1, 7).unwrap();
/// assert_eq!(x.next(2), Fraction::new(2, 7).unwrap());
/// assert_eq!(Fraction::new(9, 7).unwrap(), Fraction::new(2, 7).unwrap());
/// assert_eq!(x.to_string(), "1/7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Creates `numerator / denominator` reduced into `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidFraction`] if `denominator` is zero.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(OrbitError::InvalidFraction {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator: numerator % denominator,
            denominator,
        })
    }

    /// The numerator, always below the denominator.
    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The canonical denominator.
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// Image under the circle map: `(p·σ) mod q`.
    #[inline]
    #[must_use]
    pub fn next(&self, sigma: u32) -> Self {
        self.multiply(u64::from(sigma))
    }

    /// `(p·k) mod q`.
    #[inline]
    #[must_use]
    pub fn multiply(&self, k: u64) -> Self {
        Self {
            numerator: mul_mod(self.numerator, k, self.denominator),
            denominator: self.denominator,
        }
    }

    /// Orders two points of the same canonical denominator.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::IncompatibleDenominator`] if the denominators
    /// differ.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use rotation_orbits::Fraction;
    ///
    /// let a = Fraction::new(1, 8).unwrap();
    /// let b = Fraction::new(3, 8).unwrap();
    /// assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
    /// assert!(a.compare_to(&Fraction::new(1, 7).unwrap()).is_err());
    /// ```
    pub fn compare_to(&self, other: &Self) -> Result<Ordering> {
        self.check_denominator(other)?;
        Ok(self.numerator.cmp(&other.numerator))
    }

    /// Forward circular distance from `self` to `other`, i.e.
    /// `(other - self) mod 1`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::IncompatibleDenominator`] if the denominators
    /// differ.
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_orbits::Fraction;
    ///
    /// let a = Fraction::new(6, 8).unwrap();
    /// let b = Fraction::new(1, 8).unwrap();
    /// assert_eq!(a.distance_to(&b).unwrap(), Fraction::new(3, 8).unwrap());
    /// assert_eq!(b.distance_to(&a).unwrap(), Fraction::new(5, 8).unwrap());
    /// ```
    pub fn distance_to(&self, other: &Self) -> Result<Self> {
        self.check_denominator(other)?;
        let q = self.denominator;
        let numerator = if other.numerator >= self.numerator {
            other.numerator - self.numerator
        } else {
            q - (self.numerator - other.numerator)
        };
        Ok(Self {
            numerator,
            denominator: q,
        })
    }

    /// True iff `gcd(p, q) = 1`.
    ///
    /// Zero is in lowest terms only as `0/1`.
    #[inline]
    #[must_use]
    pub const fn is_simplified(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// The same value in lowest terms.
    #[must_use]
    pub const fn reduced(&self) -> Self {
        let g = gcd(self.numerator, self.denominator);
        Self {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    /// Re-expresses the value over `denominator`, which must be a multiple
    /// of the current one.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::IncompatibleDenominator`] if `denominator` is
    /// not a multiple of the current denominator.
    pub fn lift(&self, denominator: u64) -> Result<Self> {
        if denominator == 0 || denominator % self.denominator != 0 {
            return Err(OrbitError::IncompatibleDenominator {
                left: self.denominator,
                right: denominator,
            });
        }
        Ok(Self {
            numerator: self.numerator * (denominator / self.denominator),
            denominator,
        })
    }

    /// Orders two values as rationals, whatever their denominators.
    ///
    /// Used only to sort orbits of different periods; point comparisons
    /// inside one period go through [`Fraction::compare_to`].
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.numerator) * u128::from(other.denominator);
        let rhs = u128::from(other.numerator) * u128::from(self.denominator);
        lhs.cmp(&rhs)
    }

    fn check_denominator(&self, other: &Self) -> Result<()> {
        if self.denominator == other.denominator {
            Ok(())
        } else {
            Err(OrbitError::IncompatibleDenominator {
                left: self.denominator,
                right: other.denominator,
            })
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self> {
        let (numerator, denominator) = parse_ratio(s)?;
        Self::new(numerator, denominator)
    }
}

/// Splits `"p/q"` into its two integers.
pub(crate) fn parse_ratio(s: &str) -> Result<(u64, u64)> {
    let (num, den) = s
        .trim()
        .split_once('/')
        .ok_or_else(|| OrbitError::parse(s, "expected `numerator/denominator`"))?;
    let numerator = num
        .trim()
        .parse::<u64>()
        .map_err(|_| OrbitError::parse(s, "numerator is not an unsigned integer"))?;
    let denominator = den
        .trim()
        .parse::<u64>()
        .map_err(|_| OrbitError::parse(s, "denominator is not an unsigned integer"))?;
    Ok((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces_modulo() {
        assert_eq!(frac(8, 8), frac(0, 8));
        assert_eq!(frac(17, 8).numerator(), 1);
        assert!(Fraction::new(1, 0).is_err());
    }

    #[test]
    fn test_next_tripling() {
        // 1/8 -> 3/8 -> 9/8 = 1/8
        let x = frac(1, 8);
        assert_eq!(x.next(3), frac(3, 8));
        assert_eq!(x.next(3).next(3), x);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(frac(5, 7).multiply(3), frac(1, 7));
        assert_eq!(frac(5, 7).multiply(0), frac(0, 7));
    }

    #[test]
    fn test_compare_and_distance_mismatch() {
        let a = frac(1, 3);
        let b = frac(1, 7);
        assert_eq!(
            a.compare_to(&b),
            Err(OrbitError::IncompatibleDenominator { left: 3, right: 7 })
        );
        assert_eq!(
            b.distance_to(&a),
            Err(OrbitError::IncompatibleDenominator { left: 7, right: 3 })
        );
    }

    #[test]
    fn test_distance_is_forward() {
        let a = frac(2, 7);
        assert_eq!(a.distance_to(&a).unwrap(), frac(0, 7));
        assert_eq!(a.distance_to(&frac(5, 7)).unwrap(), frac(3, 7));
        assert_eq!(frac(5, 7).distance_to(&a).unwrap(), frac(4, 7));
    }

    #[test]
    fn test_distance_near_u64_limit() {
        // 3^40 - 1 > 2^63
        let q = crate::core::ring::circle_modulus(3, 40).unwrap();
        assert!(q > 1 << 63);
        let zero = frac(0, q);
        let last = frac(q - 1, q);
        assert_eq!(zero.distance_to(&last).unwrap(), last);
        assert_eq!(last.distance_to(&zero).unwrap(), frac(1, q));
        let mid = frac(q / 2, q);
        assert_eq!(last.distance_to(&mid).unwrap(), frac(q / 2 + 1, q));
    }

    #[test]
    fn test_is_simplified_uses_gcd() {
        assert!(frac(2, 5).is_simplified());
        assert!(!frac(2, 6).is_simplified());
        // 6 % 4 != 0, yet 4/6 is not in lowest terms
        assert!(!frac(4, 6).is_simplified());
        assert!(!frac(0, 4).is_simplified());
        assert!(frac(0, 1).is_simplified());
    }

    #[test]
    fn test_reduced_and_lift() {
        assert_eq!(frac(5, 15).reduced(), frac(1, 3));
        assert_eq!(frac(1, 3).lift(15).unwrap(), frac(5, 15));
        assert!(frac(1, 3).lift(8).is_err());
    }

    #[test]
    fn test_cmp_value_across_denominators() {
        assert_eq!(frac(1, 3).cmp_value(&frac(2, 7)), Ordering::Greater);
        assert_eq!(frac(1, 3).cmp_value(&frac(5, 15)), Ordering::Equal);
    }

    #[test]
    fn test_parse_and_display() {
        let x: Fraction = " 3 / 8 ".parse().unwrap();
        assert_eq!(x, frac(3, 8));
        assert_eq!(x.to_string(), "3/8");
        assert!("3".parse::<Fraction>().is_err());
        assert!("a/8".parse::<Fraction>().is_err());
        assert!("3/0".parse::<Fraction>().is_err());
    }
}
