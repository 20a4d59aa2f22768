//! Plain-data snapshots of results.
//!
//! Summaries carry exactly what a presentation layer shows: spellings,
//! fraction lists, the rotational flag and the rotation number, with
//! `None` standing for "not rotational".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::fraction::Fraction;
use crate::orbit::Orbit;
use crate::orbit_set::OrbitSet;

/// A fraction as a numerator/denominator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionSummary {
    /// Numerator.
    pub numerator: u64,
    /// Denominator.
    pub denominator: u64,
}

impl From<&Fraction> for FractionSummary {
    fn from(f: &Fraction) -> Self {
        Self {
            numerator: f.numerator(),
            denominator: f.denominator(),
        }
    }
}

/// Snapshot of an [`Orbit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSummary {
    /// Alphabet size.
    pub sigma: u32,
    /// Canonical spelling.
    pub point: String,
    /// The cycle, minimum first.
    pub fractions: Vec<FractionSummary>,
    /// Rotational flag.
    pub rotational: bool,
    /// Rotation number as `p/q`, `None` when not rotational.
    pub rotational_number: Option<String>,
}

impl From<&Orbit> for OrbitSummary {
    fn from(orbit: &Orbit) -> Self {
        Self {
            sigma: orbit.sigma(),
            point: orbit.point().to_string(),
            fractions: orbit.fractions().iter().map(FractionSummary::from).collect(),
            rotational: orbit.is_rotational(),
            rotational_number: orbit.rotational_number().map(|r| r.to_string()),
        }
    }
}

/// Snapshot of an [`OrbitSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitSetSummary {
    /// Alphabet size.
    pub sigma: u32,
    /// Number of member orbits.
    pub cardinality: usize,
    /// Aggregate rotational flag.
    pub rotational: bool,
    /// Rotation number as `p/q`, `None` when not rotational.
    pub rotational_number: Option<String>,
    /// Members in set order.
    pub orbits: Vec<OrbitSummary>,
}

impl From<&OrbitSet> for OrbitSetSummary {
    fn from(set: &OrbitSet) -> Self {
        Self {
            sigma: set.sigma(),
            cardinality: set.cardinality(),
            rotational: set.is_rotational(),
            rotational_number: set.rotational_number().map(|r| r.to_string()),
            orbits: set.orbits().iter().map(OrbitSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{build_orbit, build_orbit_set};

    #[test]
    fn test_orbit_summary() {
        let summary = OrbitSummary::from(&build_orbit("01", Some(3)).unwrap());
        assert_eq!(summary.point, "01");
        assert_eq!(summary.rotational_number.as_deref(), Some("1/2"));
        assert_eq!(
            summary.fractions,
            vec![
                FractionSummary { numerator: 1, denominator: 8 },
                FractionSummary { numerator: 3, denominator: 8 },
            ]
        );
    }

    #[test]
    fn test_non_rotational_has_no_number() {
        let summary = OrbitSetSummary::from(&build_orbit_set(&["01", "12"], None).unwrap());
        assert!(!summary.rotational);
        assert_eq!(summary.rotational_number, None);
        assert_eq!(summary.cardinality, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_shape() {
        let summary = OrbitSummary::from(&build_orbit("0", None).unwrap());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["point"], "0");
        assert_eq!(json["rotational_number"], "1/1");
        assert_eq!(json["fractions"][0]["denominator"], 1);
    }
}
