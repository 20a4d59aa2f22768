//! Exact arithmetic and symbolic encoding.
//!
//! - [`fraction::Fraction`]: canonical rationals in `[0, 1)` over a fixed denominator
//! - [`rotation::RotationNumber`]: rotation types `p/q`
//! - [`point::Point`]: base-σ digit strings (symbolic itineraries)
//! - [`constants`]: admissible alphabet sizes
//! - [`ring`]: integer helpers (gcd, lcm, `σ^L - 1`)

pub mod constants;
pub mod fraction;
pub mod point;
pub mod ring;
pub mod rotation;
