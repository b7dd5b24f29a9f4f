//! # bifact-factor
//!
//! Irreducible factorization of polynomials over GF(2).
//!
//! The pipeline is the classical three-stage one:
//! - **Squarefree**: gcd with the derivative, with the characteristic-2
//!   square-root recursion
//! - **Distinct-degree**: iterated Frobenius, gcd with x^(2^d) + x
//! - **Equal-degree**: probabilistic trace-map splitting
//!
//! [`factor`] composes the stages into a complete factorization into
//! irreducibles with multiplicities; [`factor_batch`] runs many inputs
//! in parallel with rayon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod distinct_degree;
pub mod equal_degree;
pub mod squarefree;

use rayon::prelude::*;
use thiserror::Error;

use bifact_poly::Gf2Poly;

pub use distinct_degree::distinct_degree_factorization;
pub use equal_degree::equal_degree_factorization;
pub use squarefree::{squarefree_factorization, SquarefreeFactor};

/// An irreducible factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactorRecord {
    /// The irreducible polynomial.
    pub poly: Gf2Poly,
    /// How many times it divides the input; always at least 1.
    pub multiplicity: usize,
}

/// Errors from the factorization entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FactorError {
    /// The zero polynomial is divisible by everything and has no
    /// factorization.
    #[error("cannot factor the zero polynomial")]
    ZeroPolynomial,
}

/// Factors a polynomial into irreducibles over GF(2).
///
/// The returned records are pairwise distinct irreducibles; the product
/// of `poly^multiplicity` over all records equals the input (constants
/// factor into the empty list). Record order is deterministic: ascending
/// multiplicity, then ascending factor degree; within one equal-degree
/// group the order follows the fixed-seed splitting sequence.
///
/// # Errors
///
/// Returns [`FactorError::ZeroPolynomial`] for the zero polynomial.
pub fn factor(f: &Gf2Poly) -> Result<Vec<FactorRecord>, FactorError> {
    if f.is_zero() {
        return Err(FactorError::ZeroPolynomial);
    }

    let mut records = Vec::new();
    for sf in squarefree_factorization(f) {
        for (group, degree) in distinct_degree_factorization(&sf.factor) {
            for poly in equal_degree_factorization(&group, degree) {
                records.push(FactorRecord {
                    poly,
                    multiplicity: sf.multiplicity,
                });
            }
        }
    }
    Ok(records)
}

/// Factors a batch of polynomials in parallel.
pub fn factor_batch(polys: &[Gf2Poly]) -> Vec<Result<Vec<FactorRecord>, FactorError>> {
    polys.par_iter().map(factor).collect()
}
