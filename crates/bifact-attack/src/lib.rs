//! # bifact-attack
//!
//! Recovers plaintext pairs `(g, h)` from a product polynomial
//! `f = g * h` over GF(2), given a bound on the plaintext size.
//!
//! The engine factors `f` into irreducibles, flattens the factorization
//! into a degree multiset with one slot per factor copy, enumerates every
//! sub-multiset whose degree sum lands in the window a `len`-bit half
//! could occupy, and reconstructs each such split by multiplication and
//! exact division. All candidates consistent with the degree window are
//! surfaced; disambiguation is the caller's problem.
//!
//! Everything is deterministic and single-threaded; all state lives in
//! one [`recover`] invocation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
pub mod multiset;
pub mod reconstruct;
pub mod subset_sum;
pub mod window;

use bifact_factor::{FactorError, FactorRecord};
use bifact_poly::Gf2Poly;

pub use error::AttackError;
pub use multiset::DegreeMultiset;
pub use reconstruct::{reconstruct, Candidate};
pub use subset_sum::{Selection, SolutionTable};
pub use window::DegreeWindow;

/// Capability interface for the factorization collaborator.
///
/// The engine only ever consumes `(irreducible, multiplicity)` records,
/// so the concrete algorithm stays opaque and tests can substitute
/// hand-built factor lists.
pub trait Factorize {
    /// Factors `f` into irreducibles with multiplicities.
    ///
    /// # Errors
    ///
    /// Implementations fail only on inputs with no factorization, i.e.
    /// the zero polynomial.
    fn factor(&self, f: &Gf2Poly) -> Result<Vec<FactorRecord>, FactorError>;
}

/// The default factorizer, backed by `bifact-factor`'s squarefree /
/// distinct-degree / equal-degree pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanZass;

impl Factorize for CanZass {
    fn factor(&self, f: &Gf2Poly) -> Result<Vec<FactorRecord>, FactorError> {
        bifact_factor::factor(f)
    }
}

/// Tunables for one recovery run.
#[derive(Clone, Copy, Debug)]
pub struct RecoverConfig {
    /// Abort with [`AttackError::SizeMismatch`] when the input degree
    /// contradicts the claimed half length. When false (the default,
    /// matching the original decoder), the mismatch is recorded in
    /// [`Recovery::size_mismatch`] and processing continues.
    pub strict_size: bool,
    /// Ceiling on selections stored by the enumerator before the run is
    /// aborted with [`AttackError::SelectionCeiling`].
    pub selection_ceiling: usize,
}

impl Default for RecoverConfig {
    fn default() -> Self {
        Self {
            strict_size: false,
            selection_ceiling: 1 << 20,
        }
    }
}

/// A recorded size/degree inconsistency (lenient mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Observed degree of the input.
    pub degree: usize,
    /// Degree implied by the claimed half length, `2 * (len - 1)`.
    pub expected: usize,
}

/// Everything a recovery run produced.
#[derive(Clone, Debug)]
pub struct Recovery {
    /// All candidate pairs in the window, in deterministic order.
    pub candidates: Vec<Candidate>,
    /// The degree window that was searched.
    pub window: DegreeWindow,
    /// Set when the input degree contradicted the claimed length but the
    /// run continued (lenient mode).
    pub size_mismatch: Option<SizeMismatch>,
    /// Number of factor copies after multiplicity expansion.
    pub factor_copies: usize,
    /// Selections stored by the enumerator, a proxy for peak memory.
    pub selections_stored: usize,
}

/// Terminal outcome of a run, for callers that only branch on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No selection landed in the window; there is nothing to report.
    NoSolution,
    /// At least one candidate was reconstructed.
    Solved {
        /// How many candidates were surfaced.
        count: usize,
    },
}

impl Recovery {
    /// Collapses the run into its terminal outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.candidates.is_empty() {
            Outcome::NoSolution
        } else {
            Outcome::Solved {
                count: self.candidates.len(),
            }
        }
    }
}

/// Recovers all plaintext pairs consistent with `f` and the claimed
/// half length of `len` bits.
///
/// # Errors
///
/// - [`AttackError::Degenerate`] if `f` is zero (checked before the
///   factorizer is ever invoked)
/// - [`AttackError::BadLength`] if `len` is not a positive multiple of 8
/// - [`AttackError::SizeMismatch`] in strict mode when `degree(f)` is
///   not `2 * (len - 1)`
/// - [`AttackError::SelectionCeiling`] if the enumeration outgrows the
///   configured ceiling
/// - [`AttackError::Factor`] / [`AttackError::ZeroMultiplicity`] for a
///   misbehaving factorizer
pub fn recover(
    f: &Gf2Poly,
    len: usize,
    config: &RecoverConfig,
    factorizer: &impl Factorize,
) -> Result<Recovery, AttackError> {
    if f.is_zero() {
        return Err(AttackError::Degenerate);
    }
    if len == 0 || len % 8 != 0 {
        return Err(AttackError::BadLength(len));
    }

    let n = f.degree();
    let expected = 2 * (len - 1);
    let size_mismatch = (n != expected).then_some(SizeMismatch {
        degree: n,
        expected,
    });
    if size_mismatch.is_some() && config.strict_size {
        return Err(AttackError::SizeMismatch {
            degree: n,
            len,
            expected,
        });
    }

    let records = factorizer.factor(f)?;
    let multiset = DegreeMultiset::from_records(&records)?;
    let window = DegreeWindow::for_degree(n, len);
    let table = SolutionTable::build(multiset.degrees(), window.hi, config.selection_ceiling)?;
    let candidates = reconstruct(f, &multiset, &table, window, len / 8)?;

    Ok(Recovery {
        candidates,
        window,
        size_mismatch,
        factor_copies: multiset.len(),
        selections_stored: table.stored(),
    })
}

/// [`recover`] with the default factorizer.
///
/// # Errors
///
/// Same as [`recover`].
pub fn recover_product(
    f: &Gf2Poly,
    len: usize,
    config: &RecoverConfig,
) -> Result<Recovery, AttackError> {
    recover(f, len, config, &CanZass)
}
