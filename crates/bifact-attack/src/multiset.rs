//! The flattened degree multiset.
//!
//! Factorization results arrive as (irreducible, multiplicity) records;
//! the enumerator wants a flat sequence where a factor of multiplicity m
//! occupies m distinguishable slots. This module performs that expansion,
//! keeping degrees and factor handles in parallel, index-aligned vectors.

use bifact_factor::FactorRecord;
use bifact_poly::Gf2Poly;

use crate::error::AttackError;

/// The flattened factor multiset: one entry per factor copy.
///
/// Entry order is the encounter order of the factorization result with
/// multiplicities expanded in place; it is stable across runs and is what
/// selection index lists refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeMultiset {
    degrees: Vec<usize>,
    factors: Vec<Gf2Poly>,
}

impl DegreeMultiset {
    /// Expands factorization records into the flat multiset.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError::ZeroMultiplicity`] if a record reports
    /// multiplicity 0; a correct factorization engine never does, but a
    /// malformed record would silently drop a factor here.
    pub fn from_records(records: &[FactorRecord]) -> Result<Self, AttackError> {
        let total: usize = records.iter().map(|r| r.multiplicity).sum();
        let mut degrees = Vec::with_capacity(total);
        let mut factors = Vec::with_capacity(total);

        for (index, record) in records.iter().enumerate() {
            if record.multiplicity == 0 {
                return Err(AttackError::ZeroMultiplicity { index });
            }
            for _ in 0..record.multiplicity {
                degrees.push(record.poly.degree());
                factors.push(record.poly.clone());
            }
        }

        Ok(Self { degrees, factors })
    }

    /// Number of factor copies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// True if there are no factor copies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Degree of the i-th factor copy.
    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.degrees[i]
    }

    /// The i-th factor copy.
    #[must_use]
    pub fn factor(&self, i: usize) -> &Gf2Poly {
        &self.factors[i]
    }

    /// All degrees in slot order.
    #[must_use]
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Sum of all copy degrees, i.e. the degree of the full product.
    #[must_use]
    pub fn total_degree(&self) -> usize {
        self.degrees.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(s: &str, multiplicity: usize) -> FactorRecord {
        FactorRecord {
            poly: s.parse().unwrap(),
            multiplicity,
        }
    }

    #[test]
    fn expands_multiplicities_in_order() {
        let records = [record("3", 2), record("7", 1), record("b", 3)];
        let multiset = DegreeMultiset::from_records(&records).unwrap();
        assert_eq!(multiset.len(), 6);
        assert_eq!(multiset.degrees(), &[1, 1, 2, 3, 3, 3]);
        assert_eq!(multiset.factor(0), multiset.factor(1));
        let seven: Gf2Poly = "7".parse().unwrap();
        assert_eq!(multiset.factor(2), &seven);
        assert_eq!(multiset.total_degree(), 13);
    }

    #[test]
    fn empty_records_make_empty_multiset() {
        let multiset = DegreeMultiset::from_records(&[]).unwrap();
        assert!(multiset.is_empty());
        assert_eq!(multiset.total_degree(), 0);
    }

    #[test]
    fn rejects_zero_multiplicity() {
        let records = [record("3", 1), record("7", 0)];
        assert_eq!(
            DegreeMultiset::from_records(&records),
            Err(AttackError::ZeroMultiplicity { index: 1 })
        );
    }
}
