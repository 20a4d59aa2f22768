//! The parameter grid a conformance run covers.

use rotation_orbits::constants::MAX_SIGMA;
use rotation_orbits::RotationNumber;
use thiserror::Error;

/// Alphabet sizes beyond this make the exhaustive oracle impractical.
pub const RECOMMENDED_MAX_SIGMA: u32 = 6;

/// Periods beyond this make the exhaustive oracle impractical.
pub const RECOMMENDED_MAX_PERIOD: u64 = 6;

/// Bounds of a conformance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Largest alphabet size checked (from 2 up).
    pub max_sigma: u32,
    /// Largest period checked (from 1 up).
    pub max_period: u64,
    /// Largest number of orbits in a union checked against the oracle.
    pub max_union: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            max_sigma: 4,
            max_period: 4,
            max_union: 3,
        }
    }
}

/// Rejected grid bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// `max_sigma` below 2 or above the textual limit.
    #[error("max sigma {0} must lie in 2..={MAX_SIGMA}")]
    Sigma(u32),
    /// `max_period` of zero.
    #[error("max period must be at least 1")]
    Period,
    /// `max_union` of zero.
    #[error("max union must be at least 1")]
    Union,
}

impl Grid {
    /// Checks the bounds.
    ///
    /// # Errors
    ///
    /// Returns the first bound that is out of range.
    pub fn validate(&self) -> Result<(), GridError> {
        if !(2..=MAX_SIGMA).contains(&self.max_sigma) {
            return Err(GridError::Sigma(self.max_sigma));
        }
        if self.max_period == 0 {
            return Err(GridError::Period);
        }
        if self.max_union == 0 {
            return Err(GridError::Union);
        }
        Ok(())
    }

    /// True if the bounds exceed what the exhaustive oracle handles quickly.
    pub fn is_expensive(&self) -> bool {
        self.max_sigma > RECOMMENDED_MAX_SIGMA || self.max_period > RECOMMENDED_MAX_PERIOD
    }

    /// Alphabet sizes `2..=max_sigma`.
    pub fn sigmas(&self) -> impl Iterator<Item = u32> {
        2..=self.max_sigma
    }

    /// Every generable rotation type with `q <= max_period`.
    pub fn rotation_numbers(&self) -> Vec<RotationNumber> {
        (1..=self.max_period)
            .flat_map(|q| (1..=q).filter_map(move |p| RotationNumber::new(p, q).ok()))
            .filter(|r| r.ensure_generable().is_ok())
            .collect()
    }

    /// Every `(σ, p/q)` pair in the grid.
    pub fn cases(&self) -> Vec<(u32, RotationNumber)> {
        let rotations = self.rotation_numbers();
        self.sigmas()
            .flat_map(|sigma| rotations.iter().map(move |&r| (sigma, r)))
            .collect()
    }
}
