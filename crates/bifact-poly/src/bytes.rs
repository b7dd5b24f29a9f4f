//! Byte and word marshalling.
//!
//! The packing is least-significant-byte first: bit k of byte i is the
//! coefficient of x^(8i + k). This matches the NTL `GF2XFromBytes` /
//! `BytesFromGF2X` convention, so buffers round-trip bit-for-bit against
//! systems built on that library.

use crate::poly::{Gf2Poly, LimbStorage, LIMB_BITS};

const LIMB_BYTES: usize = LIMB_BITS / 8;

impl Gf2Poly {
    /// Builds a polynomial from a little-endian byte buffer.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut limbs = LimbStorage::with_capacity(bytes.len() / LIMB_BYTES + 1);
        for chunk in bytes.chunks(LIMB_BYTES) {
            let mut limb = 0;
            for (i, &byte) in chunk.iter().enumerate() {
                limb |= u64::from(byte) << (i * 8);
            }
            limbs.push(limb);
        }
        Self::from_limb_storage(limbs)
    }

    /// Builds a polynomial from little-endian 32-bit words, the input
    /// shape of the original decoder.
    #[must_use]
    pub fn from_words(words: &[u32]) -> Self {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        Self::from_bytes(&bytes)
    }

    /// Packs the low `len` bytes of coefficients into a buffer,
    /// little-endian.
    ///
    /// Coefficients of x^(8*len) and above do not fit and are dropped;
    /// callers are expected to size `len` from the degree they packed.
    #[must_use]
    pub fn to_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0; len];
        for (i, byte) in out.iter_mut().enumerate() {
            let limb = self.limbs().get(i / LIMB_BYTES).copied().unwrap_or(0);
            *byte = (limb >> ((i % LIMB_BYTES) * 8)) as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_bit_order() {
        // byte 0 = 0b0000_0011 -> 1 + x; byte 1 = 0b0000_0001 -> x^8
        let p = Gf2Poly::from_bytes(&[0b11, 0b1]);
        assert!(p.coeff(0));
        assert!(p.coeff(1));
        assert!(p.coeff(8));
        assert_eq!(p.degree(), 8);
    }

    #[test]
    fn bytes_roundtrip() {
        let buf = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x00, 0x23, 0x45, 0x67];
        let p = Gf2Poly::from_bytes(&buf);
        assert_eq!(p.to_bytes(buf.len()), buf);
    }

    #[test]
    fn trailing_zero_bytes_are_padding() {
        let p = Gf2Poly::from_bytes(&[0x5a, 0x00, 0x00]);
        assert_eq!(p.degree(), 6);
        assert_eq!(p.to_bytes(3), vec![0x5a, 0x00, 0x00]);
    }

    #[test]
    fn words_match_bytes() {
        let p_words = Gf2Poly::from_words(&[0xdead_beef, 0x0000_0001]);
        let p_bytes = Gf2Poly::from_bytes(&[0xef, 0xbe, 0xad, 0xde, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(p_words, p_bytes);
    }

    #[test]
    fn to_bytes_fixed_width() {
        let p = Gf2Poly::one();
        assert_eq!(p.to_bytes(4), vec![1, 0, 0, 0]);
        assert_eq!(Gf2Poly::zero().to_bytes(2), vec![0, 0]);
    }
}
