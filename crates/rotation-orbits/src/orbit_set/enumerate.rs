//! Entry points for orbit-set enumeration.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{preimage, wiggle, OrbitSet};
use crate::core::rotation::RotationNumber;
use crate::error::{OrbitError, Result};

/// Algorithm used to enumerate orbit sets. Both produce the same sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EnumerationStrategy {
    /// Direct construction from digit-boundary placements.
    #[default]
    PreimagePlacement,
    /// Round-by-round growth through the gaps of each set.
    WiggleInterval,
}

impl EnumerationStrategy {
    /// Every strategy, production one first.
    pub const ALL: [Self; 2] = [Self::PreimagePlacement, Self::WiggleInterval];

    /// Short name used in textual forms.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreimagePlacement => "preimage",
            Self::WiggleInterval => "wiggle",
        }
    }
}

impl fmt::Display for EnumerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnumerationStrategy {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "preimage" | "preimage-placement" => Ok(Self::PreimagePlacement),
            "wiggle" | "wiggle-interval" => Ok(Self::WiggleInterval),
            _ => Err(OrbitError::parse(s, "expected `preimage` or `wiggle`")),
        }
    }
}

/// Every orbit set of rotation type `rotation` over `sigma` digits, using
/// pre-image placement.
///
/// Sets are ordered by cardinality (1 up to σ − 1), then by
/// [`OrbitSet::key`].
///
/// # Errors
///
/// - [`OrbitError::InvalidSigma`] if `sigma` is not admissible
/// - [`OrbitError::NonSimplifiedRotationalNumber`] if `p != 1` and `p/q`
///   is not in lowest terms
/// - [`OrbitError::PeriodOverflow`] if `σ^q` exceeds 64 bits
///
/// # Example
///
/// ```
/// use rotation_orbits::{generate_orbit_sets_by_attributes, RotationNumber};
///
/// let sets = generate_orbit_sets_by_attributes(3, RotationNumber::new(1, 2).unwrap()).unwrap();
/// let keys: Vec<String> = sets.iter().map(|s| s.key()).collect();
/// assert_eq!(keys, ["01", "02", "12", "01 02", "02 12"]);
/// ```
pub fn generate_orbit_sets_by_attributes(
    sigma: u32,
    rotation: RotationNumber,
) -> Result<Vec<OrbitSet>> {
    generate_orbit_sets_with(sigma, rotation, EnumerationStrategy::default())
}

/// Like [`generate_orbit_sets_by_attributes`] with an explicit algorithm.
///
/// # Errors
///
/// See [`generate_orbit_sets_by_attributes`]. The wiggle strategy may
/// also report [`OrbitError::JumpNotFound`] from orbit generation.
pub fn generate_orbit_sets_with(
    sigma: u32,
    rotation: RotationNumber,
    strategy: EnumerationStrategy,
) -> Result<Vec<OrbitSet>> {
    let mut sets = match strategy {
        EnumerationStrategy::PreimagePlacement => preimage::enumerate(sigma, rotation)?,
        EnumerationStrategy::WiggleInterval => wiggle::enumerate(sigma, rotation)?,
    };
    sets.sort_by_cached_key(|s| (s.cardinality(), s.key()));
    debug!(sigma, %rotation, %strategy, sets = sets.len(), "enumerated orbit sets");
    Ok(sets)
}
