//! Alphabet bounds.

/// Smallest admissible alphabet size. `σ = 1` would give the zero
/// denominator `1^L - 1`.
pub const MIN_SIGMA: u32 = 2;

/// Largest alphabet size with a textual digit form (`0-9a-z`).
pub const MAX_SIGMA: u32 = 36;

/// Alphabet size used to probe the jump offset of a binary seed.
pub const JUMP_PROBE_SIGMA: u32 = 3;

/// Returns true if `sigma` is an admissible alphabet size.
#[inline]
#[must_use]
pub const fn is_admissible_sigma(sigma: u32) -> bool {
    sigma >= MIN_SIGMA && sigma <= MAX_SIGMA
}
