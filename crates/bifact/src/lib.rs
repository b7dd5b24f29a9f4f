//! # bifact
//!
//! Recovery of plaintext pairs from product polynomials over GF(2).
//!
//! Given `f = g * h` in GF(2)[x] and the claimed bit length of the
//! halves, the engine factors `f` into irreducibles and enumerates every
//! regrouping of the factors whose degrees land in the window a half of
//! that size could occupy.
//!
//! ## Crates
//!
//! - [`poly`]: bit-packed GF(2)[x] arithmetic and byte marshalling
//! - [`factor`]: squarefree / distinct-degree / equal-degree
//!   factorization into irreducibles
//! - [`attack`]: the subset-selection and candidate-reconstruction
//!   engine
//!
//! ## Quick start
//!
//! ```
//! use bifact::prelude::*;
//!
//! // f = (x^7 + x + 1)(x^7 + x^3 + 1), two 8-bit halves
//! let g: Gf2Poly = "83".parse().unwrap();
//! let h: Gf2Poly = "89".parse().unwrap();
//! let f = &g * &h;
//!
//! let recovery = recover_product(&f, 8, &RecoverConfig::default()).unwrap();
//! assert_eq!(recovery.outcome(), Outcome::Solved { count: 2 });
//! assert!(recovery.candidates.iter().any(|c| c.g == g && c.h == h));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bifact_attack as attack;
pub use bifact_factor as factor;
pub use bifact_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bifact_attack::{
        recover, recover_product, AttackError, Candidate, CanZass, DegreeMultiset, DegreeWindow,
        Factorize, Outcome, Recovery, RecoverConfig, SolutionTable,
    };
    pub use bifact_factor::{factor, FactorError, FactorRecord};
    pub use bifact_poly::Gf2Poly;
}
