//! The target degree window.
//!
//! The claimed plaintext size constrains how the degree of the product
//! can split across the two halves: a well-formed input of `len`-bit
//! halves has degree `2 * (len - 1)` and splits exactly in the middle.
//! Slack between the observed degree and that ideal widens the window
//! of half degrees worth trying.

/// Inclusive range of candidate half degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegreeWindow {
    /// Lowest half degree considered.
    pub lo: usize,
    /// Highest half degree considered; also the enumeration bound.
    pub hi: usize,
}

impl DegreeWindow {
    /// Derives the window for a product of degree `n` claimed to split
    /// into two `len`-bit halves.
    ///
    /// The radius is `(len - 1) - n/2`, clamped into `0..=n/2` so the
    /// window stays inside the valid degree range `0..=n`. A well-formed
    /// input (`n == 2 * (len - 1)`) gets the degenerate window `{n/2}`.
    #[must_use]
    pub fn for_degree(n: usize, len: usize) -> Self {
        debug_assert!(len >= 1);
        let half = n / 2;
        let radius = (len - 1).saturating_sub(half).min(half);
        Self {
            lo: half - radius,
            hi: half + radius,
        }
    }

    /// True if `k` lies in the window.
    #[must_use]
    pub fn contains(self, k: usize) -> bool {
        self.lo <= k && k <= self.hi
    }
}
