//! The subset-sum enumerator.
//!
//! A 0/1 knapsack over the flattened degree multiset, except that it
//! keeps *every* selection achieving each sum rather than a single
//! witness. The state space is exponential in the worst case, so the
//! table carries an explicit ceiling on stored selections and fails fast
//! when it is crossed.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::AttackError;

/// A sub-multiset of factor copies, as a strictly increasing list of
/// slot indices. Two selections picking different copies of the same
/// irreducible are distinct.
pub type Selection = SmallVec<[u32; 8]>;

/// All selections of the multiset, grouped by degree sum.
///
/// Built once per run over sums `0..=bound`; entry 0 always holds
/// exactly the empty selection. A missing entry means no sub-multiset
/// achieves that sum, which is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionTable {
    bound: usize,
    sums: FxHashMap<usize, Vec<Selection>>,
    stored: usize,
}

impl SolutionTable {
    /// Enumerates every selection with degree sum at most `bound`.
    ///
    /// Elements are folded in slot order. For each element the sums are
    /// swept in descending order so that the entries being extended are
    /// those recorded *before* this element, which is what keeps any
    /// factor copy from appearing twice in one selection. The sweep is
    /// additionally capped at the running prefix sum, since a prefix
    /// cannot reach past its own total.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError::SelectionCeiling`] when the number of
    /// stored selections would exceed `ceiling`.
    pub fn build(degrees: &[usize], bound: usize, ceiling: usize) -> Result<Self, AttackError> {
        let mut sums: FxHashMap<usize, Vec<Selection>> = FxHashMap::default();
        sums.insert(0, vec![Selection::new()]);
        let mut stored = 1;
        let mut prefix_sum = 0_usize;

        for (i, &d) in degrees.iter().enumerate() {
            prefix_sum = prefix_sum.saturating_add(d);
            let hi = prefix_sum.min(bound);
            if d == 0 || d > hi {
                // degree-0 copies cannot exist (irreducibles have degree
                // >= 1) and oversized copies cannot participate
                continue;
            }

            let index =
                u32::try_from(i).map_err(|_| AttackError::Internal("multiset index overflow"))?;

            for v in (d..=hi).rev() {
                let Some(base) = sums.get(&(v - d)) else {
                    continue;
                };

                let extended: Vec<Selection> = base
                    .iter()
                    .map(|selection| {
                        let mut longer = selection.clone();
                        longer.push(index);
                        longer
                    })
                    .collect();

                stored += extended.len();
                if stored > ceiling {
                    return Err(AttackError::SelectionCeiling { limit: ceiling });
                }
                sums.entry(v).or_default().extend(extended);
            }
        }

        Ok(Self {
            bound,
            sums,
            stored,
        })
    }

    /// The sum bound the table was built for.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// All selections with degree sum exactly `v`, in insertion order.
    #[must_use]
    pub fn selections(&self, v: usize) -> &[Selection] {
        self.sums.get(&v).map_or(&[], Vec::as_slice)
    }

    /// Total number of selections stored across all sums.
    #[must_use]
    pub fn stored(&self) -> usize {
        self.stored
    }
}
