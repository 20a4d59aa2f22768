//! The aggregate rotational predicate.
//!
//! The circle is split into σ digit gaps; gap `d` spans the points of the
//! union whose itinerary starts with digit `d`. A rigid rotation can only
//! produce such an itinerary if the gaps, walked in digit order, are
//! separated by at least one critical length (`1/σ` of the circle) per
//! digit, counting every empty gap as one separation already spent.
//!
//! All quantities are scaled by σ so the critical length is exactly the
//! common denominator `D` and the whole circle is `σ·D`.

use crate::core::fraction::Fraction;
use crate::core::point::Point;
use crate::core::ring::{circle_modulus, lcm};
use crate::error::{OrbitError, Result};

/// One orbit as seen by the predicate: its canonical spelling and its
/// fractions in the same order as the digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Member<'a> {
    pub point: &'a Point,
    pub fractions: &'a [Fraction],
}

/// Returns true if the union of `members` passes the critical-length test.
///
/// Members of different periods are lifted to the common denominator
/// `σ^L - 1`, `L` the lcm of their periods.
pub(crate) fn is_rotational(members: &[Member<'_>], sigma: u32) -> Result<bool> {
    let period = members
        .iter()
        .try_fold(1usize, |acc, m| lcm(acc, m.fractions.len()))
        .ok_or(OrbitError::PeriodOverflow {
            sigma,
            period: usize::MAX,
        })?;
    if members.is_empty() || period == 0 {
        return Err(OrbitError::EmptyInput);
    }
    let modulus = circle_modulus(sigma, period)?;
    let gaps = digit_gaps(members, sigma, modulus)?;

    let crit = u128::from(modulus);
    let full = crit * u128::from(sigma);
    let forward = |a: u128, b: u128| (b + full - a) % full;

    let mut skipped = gaps.iter().rev().take_while(|g| g.is_none()).count();
    let mut last = match gaps.iter().rev().find_map(|g| *g) {
        Some((_, max)) => max,
        None => return Err(OrbitError::EmptyInput),
    };

    let mut events = 0usize;
    for gap in &gaps {
        match *gap {
            None => {
                events += 1;
                skipped += 1;
            }
            Some((min, max)) => {
                let spent = (skipped as u128 * crit) % full;
                if forward(spent, forward(last, min)) >= crit {
                    events += 1;
                }
                last = max;
                skipped = 0;
            }
        }
    }
    Ok(events + 1 >= sigma as usize)
}

/// Min and max (scaled by σ) of the points in each digit gap.
fn digit_gaps(
    members: &[Member<'_>],
    sigma: u32,
    modulus: u64,
) -> Result<Vec<Option<(u128, u128)>>> {
    let mut gaps: Vec<Option<(u128, u128)>> = vec![None; sigma as usize];
    for member in members {
        for (position, (&digit, fraction)) in member
            .point
            .digits()
            .iter()
            .zip(member.fractions)
            .enumerate()
        {
            let slot = gaps
                .get_mut(usize::from(digit))
                .ok_or(OrbitError::InvalidDigit {
                    digit: u32::from(digit),
                    position,
                    sigma,
                })?;
            let value = u128::from(fraction.lift(modulus)?.numerator()) * u128::from(sigma);
            *slot = Some(match *slot {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
    }
    Ok(gaps)
}
