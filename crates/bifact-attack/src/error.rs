//! Error taxonomy for the recovery engine.
//!
//! Each condition is detected at the point of first violation and kept
//! distinct; nothing is merged into a generic failure and nothing is
//! retried (the computation is deterministic).

use thiserror::Error;

use bifact_factor::FactorError;

/// Errors that can abort a recovery run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttackError {
    /// The input polynomial is zero: every polynomial divides it, so the
    /// candidate set is unconstrained. Rejected before factorization.
    #[error("degenerate input: the zero polynomial admits any split")]
    Degenerate,

    /// The claimed half length cannot be byte-packed.
    #[error("half length of {0} bits is not a positive multiple of 8")]
    BadLength(usize),

    /// The degree of the input contradicts the claimed half length.
    /// Only raised in strict mode; the lenient default records the
    /// mismatch as a diagnostic and continues.
    #[error("input degree {degree} inconsistent with {len}-bit halves (expected {expected})")]
    SizeMismatch {
        /// Observed degree of the input polynomial.
        degree: usize,
        /// Claimed bit length of one half.
        len: usize,
        /// Degree implied by the claim, `2 * (len - 1)`.
        expected: usize,
    },

    /// A factor record claimed multiplicity zero.
    #[error("factor record {index} has multiplicity 0")]
    ZeroMultiplicity {
        /// Position of the offending record.
        index: usize,
    },

    /// The solution table grew past the configured ceiling. Surfaced
    /// instead of truncating, so an oversized search space is never
    /// silently narrowed.
    #[error("solution table exceeded the ceiling of {limit} selections")]
    SelectionCeiling {
        /// The configured ceiling that was crossed.
        limit: usize,
    },

    /// The factorization collaborator failed.
    #[error(transparent)]
    Factor(#[from] FactorError),

    /// An internal invariant was violated; indicates a bug in the
    /// reconstruction logic, not an input problem.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}
