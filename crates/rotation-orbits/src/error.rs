//! Error taxonomy for the orbit engine.
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are
//! terminal for the call that raised them: generation and enumeration never
//! hand back a partial result alongside an error.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, OrbitError>;

/// Errors raised by the orbit engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrbitError {
    /// The alphabet size is outside `MIN_SIGMA..=MAX_SIGMA`.
    #[error("sigma {sigma} is not an admissible alphabet size")]
    InvalidSigma {
        /// The rejected alphabet size.
        sigma: u32,
    },

    /// A digit does not belong to the alphabet `0..sigma`.
    #[error("digit {digit} at position {position} is out of range for sigma {sigma}")]
    InvalidDigit {
        /// The offending digit value.
        digit: u32,
        /// Index of the digit in its string.
        position: usize,
        /// Alphabet size the digit was checked against.
        sigma: u32,
    },

    /// A fraction has a zero denominator.
    #[error("fraction {numerator}/{denominator} has no canonical form")]
    InvalidFraction {
        /// Numerator as given.
        numerator: u64,
        /// Denominator as given.
        denominator: u64,
    },

    /// Two fractions from different canonical denominators were compared.
    #[error("incompatible denominators {left} and {right}")]
    IncompatibleDenominator {
        /// Denominator of the receiver.
        left: u64,
        /// Denominator of the argument.
        right: u64,
    },

    /// A rotation number outside `1 <= p <= q`.
    #[error("rotation number {numerator}/{denominator} must satisfy 1 <= p <= q")]
    InvalidRotationalNumber {
        /// Numerator as given.
        numerator: u64,
        /// Denominator as given.
        denominator: u64,
    },

    /// A rotation number `p/q` with `p != 1` that is not in lowest terms.
    #[error("rotation number {numerator}/{denominator} is not in lowest terms")]
    NonSimplifiedRotationalNumber {
        /// Numerator as given.
        numerator: u64,
        /// Denominator as given.
        denominator: u64,
    },

    /// No digit of the binary seed produces a rotational orbit when bumped.
    #[error("no jump position exists for rotation number {numerator}/{denominator}")]
    JumpNotFound {
        /// Numerator of the requested rotation number.
        numerator: u64,
        /// Denominator of the requested rotation number.
        denominator: u64,
    },

    /// A rotation number was requested for an orbit without fractions.
    #[error("orbit has no fractions")]
    EmptyOrbit,

    /// An empty point list or an empty digit string.
    #[error("no input points given")]
    EmptyInput,

    /// An orbit joined a set built over a different alphabet size.
    #[error("orbit over sigma {found} cannot join a set over sigma {expected}")]
    MixedSigma {
        /// Alphabet size of the set.
        expected: u32,
        /// Alphabet size of the rejected orbit.
        found: u32,
    },

    /// `sigma^period - 1` does not fit in 64 bits.
    #[error("sigma {sigma} with period {period} exceeds 64-bit arithmetic")]
    PeriodOverflow {
        /// Alphabet size.
        sigma: u32,
        /// Period (digit-string length).
        period: usize,
    },

    /// Textual input could not be parsed.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl OrbitError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason,
        }
    }
}
