//! The [`Gf2Poly`] type: representation, constructors, and coefficient access.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Shl};
use std::str::FromStr;

use num_traits::{One, Zero};
use smallvec::SmallVec;
use thiserror::Error;

pub(crate) const LIMB_BITS: usize = u64::BITS as usize;

pub(crate) type LimbStorage = SmallVec<[u64; 2]>;

/// A polynomial over GF(2).
///
/// Coefficients are bits packed into little-endian `u64` limbs: the
/// coefficient of x^i is bit `i % 64` of limb `i / 64`.
///
/// Invariant: the limb vector never ends in a zero limb; the zero
/// polynomial is the empty limb vector.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Gf2Poly {
    limbs: LimbStorage,
}

impl Gf2Poly {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            limbs: std::iter::once(1).collect(),
        }
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self {
            limbs: std::iter::once(2).collect(),
        }
    }

    /// Creates the monomial x^n.
    #[must_use]
    pub fn monomial(n: usize) -> Self {
        let mut p = Self::zero();
        p.set_coeff(n);
        p
    }

    /// Creates a polynomial from little-endian limbs, normalizing away
    /// trailing zero limbs.
    #[must_use]
    pub fn from_limbs(limbs: &[u64]) -> Self {
        let mut p = Self {
            limbs: LimbStorage::from_slice(limbs),
        };
        p.normalize();
        p
    }

    pub(crate) fn from_limb_storage(limbs: LimbStorage) -> Self {
        let mut p = Self { limbs };
        p.normalize();
        p
    }

    pub(crate) fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial reports degree 0, the same as a nonzero
    /// constant; callers that care about the difference must check
    /// [`Gf2Poly::is_zero`] first.
    #[must_use]
    pub fn degree(&self) -> usize {
        match self.limbs.last() {
            Some(limb) => self.limbs.len() * LIMB_BITS - 1 - limb.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 1
    }

    /// Returns the coefficient of x^n.
    #[must_use]
    pub fn coeff(&self, n: usize) -> bool {
        self.limbs
            .get(n / LIMB_BITS)
            .is_some_and(|limb| (limb >> (n % LIMB_BITS)) & 1 == 1)
    }

    /// Sets the coefficient of x^n to 1.
    pub fn set_coeff(&mut self, n: usize) {
        let idx = n / LIMB_BITS;
        if idx >= self.limbs.len() {
            self.limbs.resize(idx + 1, 0);
        }
        self.limbs[idx] |= 1 << (n % LIMB_BITS);
    }

    /// Multiplies by x^n.
    #[must_use]
    pub fn shifted(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let limb_shift = n / LIMB_BITS;
        let bit_shift = n % LIMB_BITS;
        let mut limbs = LimbStorage::with_capacity(self.limbs.len() + limb_shift + 1);
        limbs.extend(std::iter::repeat(0).take(limb_shift));

        if bit_shift == 0 {
            limbs.extend(self.limbs.iter().copied());
        } else {
            let mut carry = 0;
            for &limb in &self.limbs {
                limbs.push((limb << bit_shift) | carry);
                carry = limb >> (LIMB_BITS - bit_shift);
            }
            if carry != 0 {
                limbs.push(carry);
            }
        }

        Self { limbs }
    }
}

impl AddAssign<&Gf2Poly> for Gf2Poly {
    fn add_assign(&mut self, rhs: &Gf2Poly) {
        if rhs.limbs.len() > self.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (dst, src) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *dst ^= src;
        }
        self.normalize();
    }
}

impl AddAssign for Gf2Poly {
    fn add_assign(&mut self, rhs: Gf2Poly) {
        *self += &rhs;
    }
}

impl Add<&Gf2Poly> for &Gf2Poly {
    type Output = Gf2Poly;

    fn add(self, rhs: &Gf2Poly) -> Gf2Poly {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add for Gf2Poly {
    type Output = Gf2Poly;

    fn add(self, rhs: Gf2Poly) -> Gf2Poly {
        let mut out = self;
        out += &rhs;
        out
    }
}

impl Mul<&Gf2Poly> for &Gf2Poly {
    type Output = Gf2Poly;

    fn mul(self, rhs: &Gf2Poly) -> Gf2Poly {
        self.mul_clmul(rhs)
    }
}

impl Mul for Gf2Poly {
    type Output = Gf2Poly;

    fn mul(self, rhs: Gf2Poly) -> Gf2Poly {
        &self * &rhs
    }
}

impl MulAssign<&Gf2Poly> for Gf2Poly {
    fn mul_assign(&mut self, rhs: &Gf2Poly) {
        *self = &*self * rhs;
    }
}

impl Shl<usize> for &Gf2Poly {
    type Output = Gf2Poly;

    fn shl(self, n: usize) -> Gf2Poly {
        self.shifted(n)
    }
}

impl Zero for Gf2Poly {
    fn zero() -> Self {
        Gf2Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Gf2Poly::is_zero(self)
    }
}

impl One for Gf2Poly {
    fn one() -> Self {
        Gf2Poly::one()
    }

    fn is_one(&self) -> bool {
        Gf2Poly::is_one(self)
    }
}

impl fmt::Display for Gf2Poly {
    /// Formats the coefficient bits as hex, most significant limb first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, rest)) = self.limbs.split_last() else {
            return write!(f, "0");
        };
        write!(f, "{last:x}")?;
        for limb in rest.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

/// Error parsing a hex polynomial literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParsePolyError {
    /// A character was not a hex digit.
    #[error("invalid hex digit {0:?} in polynomial literal")]
    UnexpectedChar(char),
    /// The literal was empty.
    #[error("empty polynomial literal")]
    Empty,
}

impl FromStr for Gf2Poly {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePolyError::Empty);
        }

        let mut limbs = LimbStorage::with_capacity(s.len() / (LIMB_BITS / 4) + 1);
        let mut limb = 0;
        let mut bit = 0;
        for c in s.chars().rev() {
            let Some(digit) = c.to_digit(16) else {
                return Err(ParsePolyError::UnexpectedChar(c));
            };
            limb |= u64::from(digit) << (bit % LIMB_BITS);
            bit += 4;
            if bit % LIMB_BITS == 0 {
                limbs.push(limb);
                limb = 0;
            }
        }
        if bit % LIMB_BITS != 0 {
            limbs.push(limb);
        }

        Ok(Self::from_limb_storage(limbs))
    }
}
