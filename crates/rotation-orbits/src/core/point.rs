//! Base-σ digit strings and their circle values.
//!
//! A string `d_0 d_1 … d_{L-1}` over the alphabet `0..σ` names the periodic
//! point whose base-σ expansion repeats it forever, i.e. the fraction
//! `value(d) / (σ^L - 1)`. Repeating a string, or replacing it with its
//! primitive root, names the same point; [`Point::from_fraction`] always
//! returns the shortest spelling.

use core::fmt;
use core::str::FromStr;

use super::constants::{is_admissible_sigma, MAX_SIGMA};
use super::fraction::Fraction;
use super::ring::{circle_modulus, gcd};
use crate::error::{OrbitError, Result};

/// A symbolic itinerary: a non-empty string of base-σ digits.
///
/// The alphabet size is not stored; it is supplied by whoever interprets
/// the digits ([`Point::to_fraction`], [`Orbit`](crate::Orbit)).
///
/// # Example
///
/// ```
/// use rotation_orbits::{Fraction, Point};
///
/// let p: Point = "011".parse().unwrap();
/// assert_eq!(p.to_fraction(2).unwrap(), Fraction::new(3, 7).unwrap());
/// assert_eq!(p.lowest_sigma(), 2);
///
/// let back = Point::from_fraction(&Fraction::new(3, 7).unwrap(), 2).unwrap();
/// assert_eq!(back, p);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    digits: Vec<u8>,
}

impl Point {
    /// Wraps raw digit values.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::EmptyInput`] for an empty digit list
    /// - [`OrbitError::InvalidDigit`] for a digit outside the largest
    ///   alphabet, `0..MAX_SIGMA`
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if digits.is_empty() {
            return Err(OrbitError::EmptyInput);
        }
        if let Some(position) = digits.iter().position(|&d| u32::from(d) >= MAX_SIGMA) {
            return Err(OrbitError::InvalidDigit {
                digit: u32::from(digits[position]),
                position,
                sigma: MAX_SIGMA,
            });
        }
        Ok(Self { digits })
    }

    /// The digit values.
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits (the period of the spelling, not necessarily the
    /// primitive period).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: points have at least one digit.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Smallest alphabet that contains every digit: `max digit + 1`.
    #[must_use]
    pub fn lowest_sigma(&self) -> u32 {
        self.digits.iter().copied().max().map_or(1, |d| u32::from(d) + 1)
    }

    /// Reads the digits in base `sigma` over the denominator `σ^L - 1`.
    ///
    /// The all-`(σ-1)` string evaluates to `σ^L - 1` and therefore wraps to
    /// `0`.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::InvalidSigma`] if `sigma` is not admissible
    /// - [`OrbitError::InvalidDigit`] if a digit is `>= sigma`
    /// - [`OrbitError::PeriodOverflow`] if `σ^L` exceeds 64 bits
    pub fn to_fraction(&self, sigma: u32) -> Result<Fraction> {
        self.check_digits(sigma)?;
        let modulus = circle_modulus(sigma, self.len())?;
        let base = u128::from(sigma);
        let value = self
            .digits
            .iter()
            .fold(0u128, |acc, &d| acc * base + u128::from(d));
        let numerator = (value % u128::from(modulus)) as u64;
        Fraction::new(numerator, modulus)
    }

    /// Spells a periodic fraction in base `sigma` with the fewest digits.
    ///
    /// The fraction is first put in lowest terms `p/d`; the length is the
    /// least `L` with `d | σ^L - 1`, and the digits are those of
    /// `p · (σ^L - 1) / d`, left-padded with zeros to length `L`.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::InvalidSigma`] if `sigma` is not admissible
    /// - [`OrbitError::InvalidFraction`] if the reduced denominator shares a
    ///   factor with `sigma` (the point is not periodic)
    /// - [`OrbitError::PeriodOverflow`] if the period exceeds 64-bit
    ///   arithmetic
    ///
    /// # Example
    ///
    /// ```
    /// use rotation_orbits::{Fraction, Point};
    ///
    /// let f = Fraction::new(5, 15).unwrap();
    /// assert_eq!(Point::from_fraction(&f, 2).unwrap().to_string(), "01");
    /// let z = Fraction::new(0, 8).unwrap();
    /// assert_eq!(Point::from_fraction(&z, 3).unwrap().to_string(), "0");
    /// ```
    pub fn from_fraction(fraction: &Fraction, sigma: u32) -> Result<Self> {
        if !is_admissible_sigma(sigma) {
            return Err(OrbitError::InvalidSigma { sigma });
        }
        let reduced = fraction.reduced();
        let denominator = reduced.denominator();
        if gcd(denominator, u64::from(sigma)) != 1 {
            return Err(OrbitError::InvalidFraction {
                numerator: fraction.numerator(),
                denominator: fraction.denominator(),
            });
        }

        let mut period = 1;
        let modulus = loop {
            let modulus = circle_modulus(sigma, period)?;
            if modulus % denominator == 0 {
                break modulus;
            }
            period += 1;
        };

        let mut value = reduced.numerator() * (modulus / denominator);
        let base = u64::from(sigma);
        let mut digits = vec![0u8; period];
        for slot in digits.iter_mut().rev() {
            *slot = (value % base) as u8;
            value /= base;
        }
        Ok(Self { digits })
    }

    /// Returns a copy with the digit at `index` raised by one.
    ///
    /// The result may leave the alphabet of the original; it is an
    /// intermediate value for orbit generation. Out-of-range indices leave
    /// the digits unchanged.
    #[must_use]
    pub fn bump_digit(&self, index: usize) -> Self {
        let mut digits = self.digits.clone();
        if let Some(d) = digits.get_mut(index) {
            *d = d.saturating_add(1);
        }
        Self { digits }
    }

    fn check_digits(&self, sigma: u32) -> Result<()> {
        if !is_admissible_sigma(sigma) {
            return Err(OrbitError::InvalidSigma { sigma });
        }
        match self
            .digits
            .iter()
            .position(|&d| u32::from(d) >= sigma)
        {
            Some(position) => Err(OrbitError::InvalidDigit {
                digit: u32::from(self.digits[position]),
                position,
                sigma,
            }),
            None => Ok(()),
        }
    }
}

/// Renders digits as `0-9a-z`. A digit past `z`, which only
/// [`Point::bump_digit`] can produce, renders as `?`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            let c = char::from_digit(u32::from(d), 36).unwrap_or('?');
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Point {
    type Err = OrbitError;

    /// Parses digits `0-9` and `a-z` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OrbitError::EmptyInput);
        }
        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(36)
                    .map(|d| d as u8)
                    .ok_or_else(|| OrbitError::parse(s, "digits must be 0-9 or a-z"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { digits })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(s: &str) -> Point {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_fraction_binary() {
        assert_eq!(pt("001").to_fraction(2).unwrap(), Fraction::new(1, 7).unwrap());
        assert_eq!(pt("0").to_fraction(2).unwrap(), Fraction::new(0, 1).unwrap());
        // all-ones wraps to zero
        assert_eq!(pt("11").to_fraction(2).unwrap(), Fraction::new(0, 3).unwrap());
    }

    #[test]
    fn test_to_fraction_validates() {
        assert_eq!(
            pt("012").to_fraction(2),
            Err(OrbitError::InvalidDigit {
                digit: 2,
                position: 2,
                sigma: 2
            })
        );
        assert_eq!(pt("0").to_fraction(1), Err(OrbitError::InvalidSigma { sigma: 1 }));
        assert!(matches!(
            pt("0000000000000000000000").to_fraction(10),
            Err(OrbitError::PeriodOverflow { .. })
        ));
    }

    #[test]
    fn test_from_fraction_pads_and_minimises() {
        let f = Fraction::new(1, 8).unwrap();
        assert_eq!(Point::from_fraction(&f, 3).unwrap(), pt("01"));
        let g = Fraction::new(2, 6).unwrap();
        // 1/3 in base 2 repeats "01"
        assert_eq!(Point::from_fraction(&g, 2).unwrap(), pt("01"));
        let h = Fraction::new(10, 15).unwrap();
        assert_eq!(Point::from_fraction(&h, 2).unwrap(), pt("10"));
    }

    #[test]
    fn test_from_fraction_rejects_preperiodic() {
        let half = Fraction::new(1, 2).unwrap();
        assert!(matches!(
            Point::from_fraction(&half, 2),
            Err(OrbitError::InvalidFraction { .. })
        ));
        assert_eq!(
            Point::from_fraction(&half, 0),
            Err(OrbitError::InvalidSigma { sigma: 0 })
        );
    }

    #[test]
    fn test_lowest_sigma() {
        assert_eq!(pt("000").lowest_sigma(), 1);
        assert_eq!(pt("0102").lowest_sigma(), 3);
        assert_eq!(pt("z").lowest_sigma(), 36);
    }

    #[test]
    fn test_bump_digit() {
        let p = pt("011");
        assert_eq!(p.bump_digit(1), pt("021"));
        assert_eq!(p, pt("011"));
        assert_eq!(p.bump_digit(3), p);
        assert_eq!(pt("z").bump_digit(0).to_string(), "?");
    }

    #[test]
    fn test_from_digits_limits_alphabet() {
        assert_eq!(Point::from_digits(vec![0, 35]).unwrap().to_string(), "0z");
        assert_eq!(
            Point::from_digits(vec![0, 36]),
            Err(OrbitError::InvalidDigit {
                digit: 36,
                position: 1,
                sigma: MAX_SIGMA
            })
        );
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(pt("0aZ").to_string(), "0az");
        assert_eq!("".parse::<Point>(), Err(OrbitError::EmptyInput));
        assert!("01-".parse::<Point>().is_err());
        assert!(Point::from_digits(Vec::new()).is_err());
    }
}
