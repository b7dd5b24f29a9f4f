//! Squarefree factorization over GF(2).
//!
//! Produces pairwise-coprime squarefree factors with multiplicities,
//! via the gcd of the polynomial with its formal derivative.

use bifact_poly::Gf2Poly;

/// A squarefree factor with its multiplicity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquarefreeFactor {
    /// The squarefree polynomial.
    pub factor: Gf2Poly,
    /// The multiplicity (power) of this factor.
    pub multiplicity: usize,
}

/// Computes the squarefree factorization of a nonzero polynomial.
///
/// The product of `factor^multiplicity` over the result equals the input.
/// Factors are returned in ascending multiplicity order. Constant inputs
/// yield an empty factorization.
#[must_use]
pub fn squarefree_factorization(f: &Gf2Poly) -> Vec<SquarefreeFactor> {
    debug_assert!(!f.is_zero(), "squarefree factorization of zero");
    if f.is_zero() || f.degree() == 0 {
        return Vec::new();
    }

    let mut factors = squarefree_impl(f, 1);
    factors.sort_by_key(|sf| sf.multiplicity);
    factors
}

fn squarefree_impl(f: &Gf2Poly, multiplier: usize) -> Vec<SquarefreeFactor> {
    let mut factors = Vec::new();

    // gcd with the derivative lowers every root multiplicity by one
    // (squares excepted, handled below), so this quotient is squarefree.
    let mut repeated = f.gcd(&f.derivative());
    let mut squarefree = f.divide_exact(&repeated).expect("gcd divides f");

    let mut multiplicity = 0;
    while squarefree.degree() > 0 {
        // factors still present in `repeated` are exactly those whose
        // multiplicity exceeds the current level
        let deeper = repeated.gcd(&squarefree);
        let factor = squarefree.divide_exact(&deeper).expect("gcd divides");
        repeated = repeated.divide_exact(&deeper).expect("gcd divides");
        squarefree = deeper;
        multiplicity += multiplier;

        if factor.degree() > 0 {
            factors.push(SquarefreeFactor {
                factor,
                multiplicity,
            });
        }
    }

    // In characteristic 2 a perfect square has zero derivative and
    // survives untouched in `repeated`: take the square root and rerun
    // with doubled multiplicities.
    if repeated.degree() > 0 {
        let root = repeated.sqrt().expect("leftover repeated part is a square");
        factors.extend(squarefree_impl(&root, multiplier * 2));
    }

    factors
}
