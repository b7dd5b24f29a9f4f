//! Distinct-degree factorization over GF(2).
//!
//! Splits a squarefree polynomial into groups, each the product of all
//! its irreducible factors of one degree, by iterating the Frobenius map
//! and taking gcds with x^(2^d) + x.

use bifact_poly::Gf2Poly;

/// Splits a squarefree polynomial into (product, degree) groups.
///
/// Each returned product collects every irreducible factor of the given
/// degree; groups come out in ascending degree order and multiply back
/// to the input.
#[must_use]
pub fn distinct_degree_factorization(f: &Gf2Poly) -> Vec<(Gf2Poly, usize)> {
    debug_assert!(!f.is_zero(), "distinct-degree factorization of zero");

    let mut groups = Vec::new();
    let mut current = f.clone();
    // x^(2^d) mod current, maintained by modular squaring
    let mut frobenius = Gf2Poly::x();
    let mut d = 0;

    while current.degree() > 0 {
        d += 1;
        if current.degree() == d {
            // everything of smaller degree is gone, so what remains is
            // a single irreducible
            groups.push((current, d));
            break;
        }

        frobenius = current.mod_square(&frobenius);

        // x^(2^d) + x is the product of all irreducibles whose degree
        // divides d; the earlier iterations already removed the proper
        // divisors of d.
        let split = &frobenius + &Gf2Poly::x();
        let group = split.gcd(&current);
        if group.degree() == 0 {
            continue;
        }

        current = current.divide_exact(&group).expect("gcd divides");
        groups.push((group, d));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Gf2Poly {
        s.parse().unwrap()
    }

    #[test]
    fn groups_by_degree() {
        // x * (x+1) * (x^2+x+1) * (x^3+x+1)
        let f = &(&(&p("2") * &p("3")) * &p("7")) * &p("b");
        let groups = distinct_degree_factorization(&f);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], (&p("2") * &p("3"), 1));
        assert_eq!(groups[1], (p("7"), 2));
        assert_eq!(groups[2], (p("b"), 3));
    }

    #[test]
    fn single_irreducible_short_circuits() {
        // x^4 + x + 1 is irreducible
        let groups = distinct_degree_factorization(&p("13"));
        assert_eq!(groups, vec![(p("13"), 4)]);
    }

    #[test]
    fn reference_example() {
        // from the gf2poly reference: 3813c0be6 splits into degrees 1, 2, 5, 12
        let f = p("3813c0be6");
        let groups = distinct_degree_factorization(&f);
        let degrees: Vec<usize> = groups.iter().map(|(_, d)| *d).collect();
        assert_eq!(degrees, vec![1, 2, 5, 12]);
        let mut product = Gf2Poly::one();
        for (g, _) in &groups {
            product *= g;
        }
        assert_eq!(product, f);
    }

    #[test]
    fn constant_yields_nothing() {
        assert!(distinct_degree_factorization(&Gf2Poly::one()).is_empty());
    }
}
