//! Equal-degree factorization over GF(2).
//!
//! Probabilistic splitting of a product of distinct irreducibles of one
//! known degree. Over odd characteristic one would use the power-residue
//! test; in GF(2) that degenerates (1 == -1), so the splitter is the
//! trace map, which evaluates to 0 or 1 in each irreducible component
//! with roughly equal probability.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bifact_poly::Gf2Poly;

const EDF_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// Trace of `a` in GF(2)[x]/(modulus) truncated at degree `d`:
/// a + a^2 + a^4 + ... + a^(2^(d-1)), reduced mod `modulus`.
fn pseudo_trace(modulus: &Gf2Poly, a: &Gf2Poly, d: usize) -> Gf2Poly {
    let mut term = a.div_rem(modulus).1;
    let mut trace = Gf2Poly::zero();
    for i in 0..d {
        trace += &term;
        if i + 1 < d {
            term = modulus.mod_square(&term);
        }
    }
    trace
}

/// Splits a product of distinct degree-`d` irreducibles into its factors.
///
/// The splitting attempts are driven by a fixed-seed ChaCha8 stream, so
/// the factor order is deterministic for a given input.
#[must_use]
pub fn equal_degree_factorization(f: &Gf2Poly, d: usize) -> Vec<Gf2Poly> {
    debug_assert!(d >= 1, "factor degree must be positive");
    debug_assert!(
        !f.is_zero() && f.degree() % d == 0,
        "input must be a product of degree-d irreducibles"
    );

    if f.degree() == d {
        return vec![f.clone()];
    }

    let mut rng = ChaCha8Rng::seed_from_u64(EDF_SEED);
    let mut irreducibles = Vec::with_capacity(f.degree() / d);
    let mut pending = vec![f.clone()];

    while let Some(current) = pending.pop() {
        if current.degree() == d {
            irreducibles.push(current);
            continue;
        }

        // By CRT the trace is an independent coin flip per component;
        // the gcd collects the components where it came up 0, splitting
        // off a proper factor with probability about 1/2 per attempt.
        loop {
            let a = Gf2Poly::random(current.degree(), &mut rng);
            if a.is_zero() {
                continue;
            }

            let trace = pseudo_trace(&current, &a, d);
            let half = trace.gcd(&current);
            if half.degree() > 0 && half.degree() < current.degree() {
                let complement = current.divide_exact(&half).expect("gcd divides");
                pending.push(half);
                pending.push(complement);
                break;
            }
        }
    }

    irreducibles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Gf2Poly {
        s.parse().unwrap()
    }

    fn assert_splits_into(f: &Gf2Poly, d: usize, expected: &[&str]) {
        let mut got: Vec<String> = equal_degree_factorization(f, d)
            .iter()
            .map(ToString::to_string)
            .collect();
        got.sort();
        let mut want: Vec<String> = expected.iter().map(ToString::to_string).collect();
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn splits_two_linears() {
        // x(x+1) = x^2 + x
        assert_splits_into(&p("6"), 1, &["2", "3"]);
    }

    #[test]
    fn splits_two_cubics() {
        // (x^3+x+1)(x^3+x^2+1)
        let f = &p("b") * &p("d");
        assert_splits_into(&f, 3, &["b", "d"]);
    }

    #[test]
    fn reference_example() {
        // from the gf2poly reference: 1764ac5 = 1823 * 1a63, both degree 12
        assert_splits_into(&p("1764ac5"), 12, &["1823", "1a63"]);
    }

    #[test]
    fn single_factor_is_returned_as_is() {
        assert_splits_into(&p("13"), 4, &["13"]);
    }

    #[test]
    fn splits_three_quartics() {
        // the irreducibles x^4+x+1, x^4+x^3+1, x^4+x^3+x^2+x+1
        let f = &(&p("13") * &p("19")) * &p("1f");
        assert_splits_into(&f, 4, &["13", "19", "1f"]);
    }

    #[test]
    fn deterministic_order() {
        let f = &(&p("13") * &p("19")) * &p("1f");
        assert_eq!(
            equal_degree_factorization(&f, 4),
            equal_degree_factorization(&f, 4)
        );
    }
}
