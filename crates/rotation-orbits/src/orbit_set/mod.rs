//! Unions of orbits and their enumeration.
//!
//! An [`OrbitSet`] is a non-empty collection of orbits over one alphabet,
//! kept sorted by minimal fraction. The rotational test runs over the union
//! of all member points, so a set can fail even when each member passes.

mod enumerate;
mod preimage;
pub(crate) mod rotational;
mod wiggle;

pub use enumerate::{
    generate_orbit_sets_by_attributes, generate_orbit_sets_with, EnumerationStrategy,
};
pub use preimage::{maximal_orbit_sets, MaximalOrbitSets};

use core::fmt;

use crate::core::constants::MIN_SIGMA;
use crate::core::point::Point;
use crate::core::rotation::RotationNumber;
use crate::error::{OrbitError, Result};
use crate::orbit::{find_rotational_number, Orbit};
use rotational::{is_rotational, Member};

/// A union of orbits with an aggregate rotational classification.
///
/// Building operations return fresh sets; a set never changes after
/// construction.
///
/// # Example
///
/// ```
/// use rotation_orbits::{Orbit, OrbitSet, Point};
///
/// let orbit = |s: &str| Orbit::new(&s.parse::<Point>().unwrap(), 3).unwrap();
/// let set = OrbitSet::new(vec![orbit("02"), orbit("01")]).unwrap();
/// assert_eq!(set.key(), "01 02");
/// assert!(set.is_rotational());
///
/// let bigger = set.add_orbit(orbit("12")).unwrap();
/// assert!(!bigger.is_rotational());
/// assert_eq!(set.cardinality(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrbitSet {
    sigma: u32,
    orbits: Vec<Orbit>,
    rotational: bool,
    rotational_number: Option<RotationNumber>,
}

impl OrbitSet {
    /// Builds a set from orbits sharing one alphabet size. Duplicates are
    /// dropped and members are sorted by minimal fraction.
    ///
    /// # Errors
    ///
    /// - [`OrbitError::EmptyInput`] if `orbits` is empty
    /// - [`OrbitError::MixedSigma`] if two orbits use different σ
    pub fn new(mut orbits: Vec<Orbit>) -> Result<Self> {
        let sigma = match orbits.first() {
            Some(first) => first.sigma(),
            None => return Err(OrbitError::EmptyInput),
        };
        if let Some(stray) = orbits.iter().find(|o| o.sigma() != sigma) {
            return Err(OrbitError::MixedSigma {
                expected: sigma,
                found: stray.sigma(),
            });
        }
        orbits.sort_by(|a, b| {
            a.min_fraction()
                .cmp_value(&b.min_fraction())
                .then_with(|| a.period().cmp(&b.period()))
        });
        orbits.dedup();

        let members: Vec<Member<'_>> = orbits.iter().map(Orbit::member).collect();
        let rotational = is_rotational(&members, sigma)?;
        let rotational_number = if rotational {
            Some(find_rotational_number(orbits[0].fractions())?)
        } else {
            None
        };
        Ok(Self {
            sigma,
            orbits,
            rotational,
            rotational_number,
        })
    }

    /// Builds the orbits of `points` and collects them.
    ///
    /// Without an explicit `sigma` the smallest alphabet holding every
    /// digit is used, never below two.
    ///
    /// # Errors
    ///
    /// [`OrbitError::EmptyInput`] for an empty list, otherwise the errors
    /// of [`Orbit::new`] and [`OrbitSet::new`].
    pub fn from_points(points: &[Point], sigma: Option<u32>) -> Result<Self> {
        if points.is_empty() {
            return Err(OrbitError::EmptyInput);
        }
        let sigma = sigma.unwrap_or_else(|| {
            points
                .iter()
                .map(Point::lowest_sigma)
                .max()
                .unwrap_or(MIN_SIGMA)
                .max(MIN_SIGMA)
        });
        let orbits = points
            .iter()
            .map(|p| Orbit::new(p, sigma))
            .collect::<Result<Vec<_>>>()?;
        Self::new(orbits)
    }

    /// Returns a new set with `orbit` added and the test re-run. The
    /// receiver is left as it was.
    ///
    /// # Errors
    ///
    /// [`OrbitError::MixedSigma`] if `orbit` uses another alphabet size.
    pub fn add_orbit(&self, orbit: Orbit) -> Result<Self> {
        let mut orbits = Vec::with_capacity(self.orbits.len() + 1);
        orbits.extend(self.orbits.iter().cloned());
        orbits.push(orbit);
        Self::new(orbits)
    }

    /// Alphabet size shared by all members.
    #[inline]
    #[must_use]
    pub const fn sigma(&self) -> u32 {
        self.sigma
    }

    /// Members in ascending order of minimal fraction.
    #[inline]
    #[must_use]
    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Number of member orbits.
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.orbits.len()
    }

    /// Aggregate rotational flag over the union of member points.
    #[inline]
    #[must_use]
    pub const fn is_rotational(&self) -> bool {
        self.rotational
    }

    /// Rotation type of the first member, present when the union is
    /// rotational.
    #[inline]
    #[must_use]
    pub const fn rotational_number(&self) -> Option<RotationNumber> {
        self.rotational_number
    }

    /// True if an orbit equal to `orbit` is a member.
    #[must_use]
    pub fn contains(&self, orbit: &Orbit) -> bool {
        self.orbits.contains(orbit)
    }

    /// Canonical identity: member spellings in set order, space separated.
    #[must_use]
    pub fn key(&self) -> String {
        self.orbits
            .iter()
            .map(|o| o.point().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for OrbitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.key())
    }
}
