//! Periodic orbits of `x ↦ σx (mod 1)`.
//!
//! An [`Orbit`] is built from any spelling of one of its points. Its
//! fractions are listed in forward order starting from the minimum, all
//! over the canonical denominator `σ^L - 1` of the primitive period `L`,
//! and its canonical [`Point`] is the spelling of that minimum.

mod generate;

pub use generate::generate_orbits_by_attributes;

use core::fmt;

use crate::core::fraction::Fraction;
use crate::core::point::Point;
use crate::core::rotation::RotationNumber;
use crate::error::{OrbitError, Result};
use crate::orbit_set::rotational::{is_rotational, Member};

/// A periodic orbit with its rotational classification.
///
/// # Example
///
/// ```
/// use rotation_orbits::{Orbit, Point, RotationNumber};
///
/// let orbit = Orbit::new(&"0012".parse::<Point>().unwrap(), 3).unwrap();
/// assert_eq!(orbit.point().to_string(), "0012");
/// assert_eq!(orbit.period(), 4);
/// assert!(orbit.is_rotational());
/// assert_eq!(orbit.rotational_number(), Some(RotationNumber::new(1, 4).unwrap()));
///
/// let shifted = Orbit::new(&"1200".parse::<Point>().unwrap(), 3).unwrap();
/// assert_eq!(shifted, orbit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Orbit {
    sigma: u32,
    point: Point,
    fractions: Vec<Fraction>,
    rotational: bool,
    rotational_number: Option<RotationNumber>,
}

impl Orbit {
    /// Builds the orbit through `point` under `x ↦ σx`.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`Point::to_fraction`] and
    /// [`Point::from_fraction`].
    pub fn new(point: &Point, sigma: u32) -> Result<Self> {
        let start = point.to_fraction(sigma)?;
        let fractions = find_fractions(&start, sigma)?;
        let canonical = Point::from_fraction(&fractions[0], sigma)?;
        let rotational = is_rotational(
            &[Member {
                point: &canonical,
                fractions: &fractions,
            }],
            sigma,
        )?;
        let rotational_number = if rotational {
            Some(find_rotational_number(&fractions)?)
        } else {
            None
        };
        Ok(Self {
            sigma,
            point: canonical,
            fractions,
            rotational,
            rotational_number,
        })
    }

    /// Builds the orbit through a periodic fraction.
    ///
    /// # Errors
    ///
    /// See [`Point::from_fraction`].
    pub fn from_fraction(fraction: &Fraction, sigma: u32) -> Result<Self> {
        Self::new(&Point::from_fraction(fraction, sigma)?, sigma)
    }

    /// Re-reads the canonical digit string under another alphabet size.
    ///
    /// # Errors
    ///
    /// Fails like [`Orbit::new`], e.g. with [`OrbitError::InvalidDigit`]
    /// when `sigma` is smaller than [`Point::lowest_sigma`].
    pub fn with_sigma(&self, sigma: u32) -> Result<Self> {
        Self::new(&self.point, sigma)
    }

    /// Alphabet size.
    #[inline]
    #[must_use]
    pub const fn sigma(&self) -> u32 {
        self.sigma
    }

    /// Canonical spelling: the digits of the minimal fraction.
    #[inline]
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The cycle in forward order, minimum first.
    #[inline]
    #[must_use]
    pub fn fractions(&self) -> &[Fraction] {
        &self.fractions
    }

    /// Primitive period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> usize {
        self.fractions.len()
    }

    /// The minimal point of the cycle.
    #[inline]
    #[must_use]
    pub fn min_fraction(&self) -> Fraction {
        self.fractions[0]
    }

    /// True if the digit structure is that of a rigid rotation.
    #[inline]
    #[must_use]
    pub const fn is_rotational(&self) -> bool {
        self.rotational
    }

    /// The rotation type, present only for rotational orbits.
    #[inline]
    #[must_use]
    pub const fn rotational_number(&self) -> Option<RotationNumber> {
        self.rotational_number
    }

    pub(crate) fn member(&self) -> Member<'_> {
        Member {
            point: &self.point,
            fractions: &self.fractions,
        }
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.point)
    }
}

/// Collects the forward cycle of `start` and rotates it so the minimum
/// comes first.
///
/// The start is respelled over its primitive period first, so the list is
/// duplicate-free and all entries share the denominator `σ^L - 1`.
fn find_fractions(start: &Fraction, sigma: u32) -> Result<Vec<Fraction>> {
    let first = Point::from_fraction(start, sigma)?.to_fraction(sigma)?;
    let mut fractions = vec![first];
    let mut x = first.next(sigma);
    while x != first {
        fractions.push(x);
        x = x.next(sigma);
    }
    let min_index = fractions
        .iter()
        .enumerate()
        .min_by_key(|(_, f)| f.numerator())
        .map_or(0, |(i, _)| i);
    fractions.rotate_left(min_index);
    Ok(fractions)
}

/// Rotation number of a cycle listed minimum first.
///
/// For a cycle `f_0 < …`, the numerator is one plus the number of points
/// `f_i` (`i >= 2`) lying below `f_1`; the denominator is the period. A
/// fixed point has type `1/1`.
///
/// # Errors
///
/// - [`OrbitError::EmptyOrbit`] for an empty list
/// - [`OrbitError::IncompatibleDenominator`] if the list mixes denominators
pub fn find_rotational_number(fractions: &[Fraction]) -> Result<RotationNumber> {
    let (second, rest) = match fractions {
        [] => return Err(OrbitError::EmptyOrbit),
        [_] => return Ok(RotationNumber::FIXED),
        [_, second, rest @ ..] => (second, rest),
    };
    let mut skipped = 0u64;
    for f in rest {
        if f.compare_to(second)?.is_lt() {
            skipped += 1;
        }
    }
    RotationNumber::new(1 + skipped, fractions.len() as u64)
}
