//! Property-based tests for GF(2)[x] arithmetic.

use proptest::prelude::*;

use crate::Gf2Poly;

// Strategy for arbitrary polynomials up to a few limbs
fn poly() -> impl Strategy<Value = Gf2Poly> {
    proptest::collection::vec(any::<u64>(), 0..4).prop_map(|limbs| Gf2Poly::from_limbs(&limbs))
}

// Strategy for nonzero polynomials
fn nonzero_poly() -> impl Strategy<Value = Gf2Poly> {
    poly().prop_filter("nonzero", |p| !p.is_zero())
}

proptest! {
    // Ring axioms

    #[test]
    fn add_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_self_inverse(a in poly()) {
        prop_assert!((&a + &a).is_zero());
    }

    #[test]
    fn mul_commutative(a in poly(), b in poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn mul_associative(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_distributive(a in poly(), b in poly(), c in poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn mul_degree_adds(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
    }

    // Division and gcd

    #[test]
    fn div_rem_reconstructs(a in poly(), b in nonzero_poly()) {
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(&(&q * &b) + &r, a);
        prop_assert!(r.is_zero() || r.degree() < b.degree());
    }

    #[test]
    fn exact_division_of_product(a in nonzero_poly(), b in nonzero_poly()) {
        let product = &a * &b;
        prop_assert_eq!(product.divide_exact(&a).unwrap(), b);
    }

    #[test]
    fn gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
        let g = a.gcd(&b);
        prop_assert!(a.divide_exact(&g).is_ok());
        prop_assert!(b.divide_exact(&g).is_ok());
    }

    // Characteristic-2 structure

    #[test]
    fn derivative_is_linear(a in poly(), b in poly()) {
        prop_assert_eq!((&a + &b).derivative(), &a.derivative() + &b.derivative());
    }

    #[test]
    fn derivative_of_square_vanishes(a in poly()) {
        prop_assert!((&a * &a).derivative().is_zero());
    }

    #[test]
    fn sqrt_of_square(a in poly()) {
        prop_assert_eq!((&a * &a).sqrt(), Some(a));
    }

    // Marshalling

    #[test]
    fn bytes_roundtrip(buf in proptest::collection::vec(any::<u8>(), 0..24)) {
        let p = Gf2Poly::from_bytes(&buf);
        prop_assert_eq!(p.to_bytes(buf.len()), buf);
    }

    #[test]
    fn hex_roundtrip(a in poly()) {
        let parsed: Gf2Poly = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }
}
