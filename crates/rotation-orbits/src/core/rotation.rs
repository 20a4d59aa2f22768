//! Rotation numbers `p/q`.

use core::fmt;
use core::str::FromStr;

use super::fraction::parse_ratio;
use super::ring::gcd;
use crate::error::{OrbitError, Result};

/// The rotation type `p/q` of a rotational orbit: `q` is the period and `p`
/// counts how many points each step of the cycle passes over, plus one.
///
/// Unlike [`Fraction`](super::fraction::Fraction), a rotation number is
/// never mod-reduced: the fixed-point type is `1/1`, not `0/1`.
///
/// # Example
///
/// ```
/// use rotation_orbits::RotationNumber;
///
/// let r: RotationNumber = "2/5".parse().unwrap();
/// assert_eq!(r.numerator(), 2);
/// assert_eq!(r.denominator(), 5);
/// assert!(r.is_simplified());
/// assert!(RotationNumber::new(3, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RotationNumber {
    numerator: u64,
    denominator: u64,
}

impl RotationNumber {
    /// Creates `p/q`.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidRotationalNumber`] unless
    /// `1 <= p <= q`.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if numerator == 0 || numerator > denominator {
            return Err(OrbitError::InvalidRotationalNumber {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The fixed-point type `1/1`.
    pub const FIXED: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// `p`.
    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> u64 {
        self.numerator
    }

    /// `q`, the period of every orbit of this type.
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> u64 {
        self.denominator
    }

    /// True iff `gcd(p, q) = 1`.
    #[inline]
    #[must_use]
    pub const fn is_simplified(&self) -> bool {
        gcd(self.numerator, self.denominator) == 1
    }

    /// Validates the type for orbit generation: lowest terms, except that
    /// `1/q` is always accepted.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::NonSimplifiedRotationalNumber`] otherwise.
    pub fn ensure_generable(&self) -> Result<()> {
        if self.numerator == 1 || self.is_simplified() {
            Ok(())
        } else {
            Err(OrbitError::NonSimplifiedRotationalNumber {
                numerator: self.numerator,
                denominator: self.denominator,
            })
        }
    }
}

impl fmt::Display for RotationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for RotationNumber {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self> {
        let (numerator, denominator) = parse_ratio(s)?;
        Self::new(numerator, denominator)
    }
}
