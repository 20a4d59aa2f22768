//! Rotational orbits of the circle map `x ↦ σx (mod 1)`
//!
//! Points of the circle with a periodic base-σ expansion are written as
//! digit strings ("symbolic itineraries"). This crate finds the periodic
//! orbit of such a point, decides whether the orbit's digit structure is
//! that of a rigid rotation, and enumerates every orbit and every union of
//! orbits realizing a given rotation type `p/q`.
//!
//! # Model
//!
//! ```text
//! Point     "011"                 digits over 0..σ
//! Fraction  3/7                   value over σ^L - 1
//! Orbit     3/7 -> 6/7 -> 5/7     forward cycle, minimum first
//! OrbitSet  {01 02}               union tested as one configuration
//! ```
//!
//! All arithmetic is exact: fractions of period `L` live over the
//! denominator `σ^L - 1` and every product is formed in 128 bits.
//!
//! # Example: Classify an Orbit
//!
//! ```
//! use rotation_orbits::{Orbit, Point, RotationNumber};
//!
//! let orbit = Orbit::new(&"110".parse::<Point>().unwrap(), 2).unwrap();
//! assert_eq!(orbit.point().to_string(), "011");
//! assert!(orbit.is_rotational());
//! assert_eq!(orbit.rotational_number(), Some(RotationNumber::new(2, 3).unwrap()));
//! ```
//!
//! # Example: Enumerate by Rotation Type
//!
//! ```
//! use rotation_orbits::prelude::*;
//!
//! let third = RotationNumber::new(1, 3).unwrap();
//! let orbits = generate_orbits_by_attributes(3, third).unwrap();
//! assert_eq!(orbits.len(), 4);
//!
//! let sets = generate_orbit_sets_by_attributes(3, third).unwrap();
//! assert!(sets.iter().all(|s| s.is_rotational()));
//! assert_eq!(sets.iter().filter(|s| s.cardinality() == 2).count(), 3);
//! ```
//!
//! # Enumeration Strategies
//!
//! | Strategy | Method | Cost |
//! |----------|--------|------|
//! | [`EnumerationStrategy::PreimagePlacement`] | direct construction | `q^(σ-2)` placements |
//! | [`EnumerationStrategy::WiggleInterval`] | gap-by-gap search | rounds of `add_orbit` trials |
//!
//! Both return the same sets in the same order; the first is the default.
//!
//! # Logging
//!
//! Enumeration emits `tracing` events (`debug` per round or run, `trace`
//! per candidate). The crate installs no subscriber.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![warn(missing_docs)]

// Exact arithmetic and encodings (fraction, point, rotation, ring, constants)
mod core;

// Orbits and attribute-driven generation
mod orbit;

// Orbit sets, the rotational predicate and enumeration
mod orbit_set;

pub mod api;
pub mod error;
pub mod summary;

pub use core::constants;
pub use core::ring;

pub use core::fraction::Fraction;
pub use core::point::Point;
pub use core::rotation::RotationNumber;

pub use error::{OrbitError, Result};
pub use orbit::{find_rotational_number, generate_orbits_by_attributes, Orbit};
pub use orbit_set::{
    generate_orbit_sets_by_attributes, generate_orbit_sets_with, maximal_orbit_sets,
    EnumerationStrategy, MaximalOrbitSets, OrbitSet,
};
pub use summary::{FractionSummary, OrbitSetSummary, OrbitSummary};

/// Prelude module for convenient imports.
///
/// ```
/// use rotation_orbits::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::constants::{MAX_SIGMA, MIN_SIGMA};
    pub use crate::core::fraction::Fraction;
    pub use crate::core::point::Point;
    pub use crate::core::rotation::RotationNumber;

    pub use crate::error::{OrbitError, Result};
    pub use crate::orbit::{generate_orbits_by_attributes, Orbit};
    pub use crate::orbit_set::{
        generate_orbit_sets_by_attributes, generate_orbit_sets_with, maximal_orbit_sets,
        EnumerationStrategy, OrbitSet,
    };
}
