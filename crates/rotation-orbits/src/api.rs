//! Text-level call surface for presentation layers.
//!
//! These wrappers take the raw strings a user typed, pick the default
//! alphabet size where one is optional, and hand back engine values.

use crate::core::constants::MIN_SIGMA;
use crate::core::fraction::Fraction;
use crate::core::point::Point;
use crate::error::Result;
use crate::orbit::Orbit;
use crate::orbit_set::OrbitSet;

/// Builds the orbit of a digit string.
///
/// Without `sigma`, the point's [`lowest_sigma`](Point::lowest_sigma) is
/// used, raised to two if needed.
///
/// # Errors
///
/// [`OrbitError::Parse`](crate::OrbitError::Parse) for malformed digits,
/// [`OrbitError::InvalidSigma`](crate::OrbitError::InvalidSigma) for an
/// inadmissible explicit σ, and the errors of [`Orbit::new`].
///
/// # Example
///
/// ```
/// use rotation_orbits::api::build_orbit;
///
/// let orbit = build_orbit("1101", None).unwrap();
/// assert_eq!(orbit.sigma(), 2);
/// assert_eq!(orbit.point().to_string(), "0111");
/// assert!(build_orbit("01", Some(1)).is_err());
/// ```
pub fn build_orbit(digits: &str, sigma: Option<u32>) -> Result<Orbit> {
    let point: Point = digits.parse()?;
    let sigma = sigma.unwrap_or_else(|| point.lowest_sigma().max(MIN_SIGMA));
    Orbit::new(&point, sigma)
}

/// Builds the orbit through the fraction `n/d`.
///
/// # Errors
///
/// [`OrbitError::Parse`](crate::OrbitError::Parse) for malformed text and
/// the errors of [`Orbit::from_fraction`].
///
/// # Example
///
/// ```
/// use rotation_orbits::api::build_orbit_from_fraction;
///
/// let orbit = build_orbit_from_fraction("3/8", 3).unwrap();
/// assert_eq!(orbit.point().to_string(), "01");
/// ```
pub fn build_orbit_from_fraction(fraction: &str, sigma: u32) -> Result<Orbit> {
    let fraction: Fraction = fraction.parse()?;
    Orbit::from_fraction(&fraction, sigma)
}

/// Builds the set of orbits through each of `points`.
///
/// # Errors
///
/// [`OrbitError::EmptyInput`](crate::OrbitError::EmptyInput) for an empty
/// list, otherwise the errors of [`OrbitSet::from_points`].
pub fn build_orbit_set<S: AsRef<str>>(points: &[S], sigma: Option<u32>) -> Result<OrbitSet> {
    let points = points
        .iter()
        .map(|s| s.as_ref().parse::<Point>())
        .collect::<Result<Vec<_>>>()?;
    OrbitSet::from_points(&points, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrbitError;

    #[test]
    fn test_build_orbit_default_sigma() {
        assert_eq!(build_orbit("0", None).unwrap().sigma(), 2);
        assert_eq!(build_orbit("0130", None).unwrap().sigma(), 4);
        assert_eq!(build_orbit("01", Some(5)).unwrap().sigma(), 5);
        assert_eq!(build_orbit("", None), Err(OrbitError::EmptyInput));
    }

    #[test]
    fn test_build_orbit_from_fraction_text() {
        let orbit = build_orbit_from_fraction("1/7", 2).unwrap();
        assert_eq!(orbit.point().to_string(), "001");
        assert!(matches!(
            build_orbit_from_fraction("1-7", 2),
            Err(OrbitError::Parse { .. })
        ));
    }

    #[test]
    fn test_build_orbit_set() {
        let set = build_orbit_set(&["01", "02"], None).unwrap();
        assert_eq!(set.sigma(), 3);
        assert!(set.is_rotational());
        let empty: [&str; 0] = [];
        assert_eq!(build_orbit_set(&empty, None), Err(OrbitError::EmptyInput));
    }
}
