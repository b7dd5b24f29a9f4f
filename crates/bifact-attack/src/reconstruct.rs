//! Candidate reconstruction.
//!
//! Turns each enumerated selection inside the target window into a
//! candidate plaintext pair: the product of the selected factor copies
//! is one half, the exact quotient of the input by that product is the
//! other, and both are packed into fixed-width byte buffers.

use bifact_poly::Gf2Poly;

use crate::error::AttackError;
use crate::multiset::DegreeMultiset;
use crate::subset_sum::SolutionTable;
use crate::window::DegreeWindow;

/// One reconstructed candidate plaintext pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The half built as the product of the selected factor copies.
    pub g: Gf2Poly,
    /// The complementary half, `f / g`.
    pub h: Gf2Poly,
    /// `g` packed little-endian into the fixed half width.
    pub g_bytes: Vec<u8>,
    /// `h` packed little-endian into the fixed half width.
    pub h_bytes: Vec<u8>,
}

impl Candidate {
    /// The concatenated plaintext, `g` half first.
    #[must_use]
    pub fn plaintext(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.g_bytes.len() + self.h_bytes.len());
        out.extend_from_slice(&self.g_bytes);
        out.extend_from_slice(&self.h_bytes);
        out
    }
}

/// Builds every candidate pair for selections inside the window.
///
/// Candidates come out in ascending degree `k`, and within one `k` in
/// the enumerator's insertion order, so the whole sequence is
/// deterministic. Nothing is deduplicated or ranked.
///
/// # Errors
///
/// Returns [`AttackError::Internal`] if a selection product fails to
/// divide `f` exactly; by construction that cannot happen unless the
/// table and `f` disagree, which is a bug, not an input condition.
pub fn reconstruct(
    f: &Gf2Poly,
    multiset: &DegreeMultiset,
    table: &SolutionTable,
    window: DegreeWindow,
    half_bytes: usize,
) -> Result<Vec<Candidate>, AttackError> {
    let mut candidates = Vec::new();

    for k in window.lo..=window.hi {
        for selection in table.selections(k) {
            let mut g = Gf2Poly::one();
            for &i in selection {
                g *= multiset.factor(i as usize);
            }

            let h = f
                .divide_exact(&g)
                .map_err(|_| AttackError::Internal("selection product does not divide the input"))?;

            candidates.push(Candidate {
                g_bytes: g.to_bytes(half_bytes),
                h_bytes: h.to_bytes(half_bytes),
                g,
                h,
            });
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bifact_factor::FactorRecord;

    fn p(s: &str) -> Gf2Poly {
        s.parse().unwrap()
    }

    fn multiset_of(factors: &[&str]) -> DegreeMultiset {
        let records: Vec<FactorRecord> = factors
            .iter()
            .map(|s| FactorRecord {
                poly: p(s),
                multiplicity: 1,
            })
            .collect();
        DegreeMultiset::from_records(&records).unwrap()
    }

    #[test]
    fn every_candidate_multiplies_back() {
        // f = (x+1)(x^2+x+1)(x^3+x+1), degree 6
        let multiset = multiset_of(&["3", "7", "b"]);
        let f = &(&p("3") * &p("7")) * &p("b");
        let window = DegreeWindow { lo: 0, hi: 6 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let candidates = reconstruct(&f, &multiset, &table, window, 1).unwrap();

        // all 2^3 subsets land in the window
        assert_eq!(candidates.len(), 8);
        for c in &candidates {
            assert_eq!(&c.g * &c.h, f);
        }
    }

    #[test]
    fn candidates_ascend_by_degree() {
        let multiset = multiset_of(&["3", "7", "b"]);
        let f = &(&p("3") * &p("7")) * &p("b");
        let window = DegreeWindow { lo: 0, hi: 6 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let candidates = reconstruct(&f, &multiset, &table, window, 1).unwrap();

        let degrees: Vec<usize> = candidates.iter().map(|c| c.g.degree()).collect();
        let mut sorted = degrees.clone();
        sorted.sort_unstable();
        assert_eq!(degrees, sorted);
    }

    #[test]
    fn window_filters_candidates() {
        let multiset = multiset_of(&["3", "7", "b"]);
        let f = &(&p("3") * &p("7")) * &p("b");
        let window = DegreeWindow { lo: 3, hi: 3 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let candidates = reconstruct(&f, &multiset, &table, window, 1).unwrap();

        // degree 3 = {b} or {3, 7}
        assert_eq!(candidates.len(), 2);
        for c in &candidates {
            assert_eq!(c.g.degree(), 3);
            assert_eq!(&c.g * &c.h, f);
        }
    }

    #[test]
    fn byte_buffers_have_fixed_width() {
        let multiset = multiset_of(&["3"]);
        let f = &p("3") * &p("7");
        let window = DegreeWindow { lo: 0, hi: 1 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let candidates = reconstruct(&f, &multiset, &table, window, 2).unwrap();

        for c in &candidates {
            assert_eq!(c.g_bytes.len(), 2);
            assert_eq!(c.h_bytes.len(), 2);
            assert_eq!(c.plaintext().len(), 4);
        }
    }

    #[test]
    fn empty_selection_yields_trivial_half() {
        let multiset = multiset_of(&["7"]);
        let f = p("7");
        let window = DegreeWindow { lo: 0, hi: 0 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let candidates = reconstruct(&f, &multiset, &table, window, 1).unwrap();

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].g.is_one());
        assert_eq!(candidates[0].h, f);
    }

    #[test]
    fn mismatched_table_is_an_internal_error() {
        // table built from one multiset, f unrelated: division must fail
        let multiset = multiset_of(&["3"]);
        let f = p("7");
        let window = DegreeWindow { lo: 1, hi: 1 };
        let table = SolutionTable::build(multiset.degrees(), window.hi, 1 << 16).unwrap();
        let result = reconstruct(&f, &multiset, &table, window, 1);
        assert!(matches!(result, Err(AttackError::Internal(_))));
    }
}
