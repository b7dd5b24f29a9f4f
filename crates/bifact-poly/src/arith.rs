//! Multiplication, division, gcd, and the characteristic-2 helpers.

use rand::Rng;

use crate::poly::{Gf2Poly, LimbStorage, LIMB_BITS};
use crate::ExactDivisionError;

/// Carry-less multiplication of two limbs, returning (low, high).
fn clmul(a: u64, mut b: u64) -> (u64, u64) {
    let mut lo = 0;
    let mut hi = 0;
    while b != 0 {
        let k = b.trailing_zeros();
        lo ^= a << k;
        if k > 0 {
            hi ^= a >> (LIMB_BITS as u32 - k);
        }
        b &= b - 1;
    }
    (lo, hi)
}

impl Gf2Poly {
    pub(crate) fn mul_clmul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let a = self.limbs();
        let b = other.limbs();
        let mut out: LimbStorage = std::iter::repeat(0).take(a.len() + b.len()).collect();

        for (i, &ai) in a.iter().enumerate() {
            if ai == 0 {
                continue;
            }
            for (j, &bj) in b.iter().enumerate() {
                if bj == 0 {
                    continue;
                }
                let (lo, hi) = clmul(ai, bj);
                out[i + j] ^= lo;
                out[i + j + 1] ^= hi;
            }
        }

        Self::from_limb_storage(out)
    }

    /// Divides by `divisor`, returning (quotient, remainder).
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "division by the zero polynomial");

        let d = divisor.degree();
        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= d {
            let shift = remainder.degree() - d;
            quotient.set_coeff(shift);
            remainder += &divisor.shifted(shift);
        }

        (quotient, remainder)
    }

    /// Divides by `divisor`, which must divide exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ExactDivisionError`] if the remainder is nonzero.
    pub fn divide_exact(&self, divisor: &Self) -> Result<Self, ExactDivisionError> {
        let (quotient, remainder) = self.div_rem(divisor);
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(ExactDivisionError)
        }
    }

    /// Computes the greatest common divisor.
    ///
    /// Over GF(2) every nonzero polynomial is monic, so the result is
    /// canonical without scaling.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.div_rem(&b).1;
            a = b;
            b = r;
        }
        a
    }

    /// Computes the formal derivative.
    ///
    /// In characteristic 2 only odd-degree terms survive: the coefficient
    /// of x^(2k+1) moves to x^(2k), everything else vanishes.
    #[must_use]
    pub fn derivative(&self) -> Self {
        const EVEN_MASK: u64 = 0x5555_5555_5555_5555;
        let limbs: LimbStorage = self.limbs().iter().map(|l| (l >> 1) & EVEN_MASK).collect();
        Self::from_limb_storage(limbs)
    }

    /// Computes the square root, if this polynomial is a perfect square.
    ///
    /// Squaring over GF(2) is the Frobenius endomorphism: it spaces the
    /// coefficient bits out to even positions. A polynomial is a square
    /// exactly when all odd positions are clear, and the root is the
    /// compaction of the even positions.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        const ODD_MASK: u64 = 0xaaaa_aaaa_aaaa_aaaa;
        if self.limbs().iter().any(|l| l & ODD_MASK != 0) {
            return None;
        }

        let mut root = Self::zero();
        for i in (0..=self.degree()).step_by(2) {
            if self.coeff(i) {
                root.set_coeff(i / 2);
            }
        }
        Some(root)
    }

    /// Computes a² mod self.
    ///
    /// # Panics
    ///
    /// Panics if self is the zero polynomial.
    #[must_use]
    pub fn mod_square(&self, a: &Self) -> Self {
        (a * a).div_rem(self).1
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: usize) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }

        result
    }

    /// Generates a uniformly random polynomial of degree below `bits`.
    pub fn random<R: Rng>(bits: usize, rng: &mut R) -> Self {
        if bits == 0 {
            return Self::zero();
        }

        let n_limbs = (bits + LIMB_BITS - 1) / LIMB_BITS;
        let mut limbs: LimbStorage = (0..n_limbs).map(|_| rng.gen()).collect();
        let top = bits % LIMB_BITS;
        if top != 0 {
            limbs[n_limbs - 1] &= (1 << top) - 1;
        }
        Self::from_limb_storage(limbs)
    }
}
