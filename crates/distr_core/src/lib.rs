//! # distr_core: Numerical Foundation for Continuous Distributions
//!
//! ## Layer 1 (Foundation) Role
//!
//! distr_core serves as the bottom layer of the workspace, providing:
//! - Special-function kernel: `erf`, `erfc` and their inverses (`math::special`)
//! - Bounded bracketing root-finder (`math::solvers`)
//! - The `ContinuousDistribution` capability trait (`traits`)
//! - Error types: `DistributionError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other distr_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Totality
//!
//! Every routine in this crate terminates in a bounded number of steps for
//! every input. The special-function kernel is branch-total (extreme
//! arguments saturate to the representable limits), and the bracketing
//! solver returns its best estimate when the iteration budget is exhausted
//! rather than failing with a convergence error.
//!
//! ## Usage Examples
//!
//! ```rust
//! use distr_core::math::special::{erf, erfc, erfc_inv};
//!
//! // Forward error function
//! let e = erf(1.0_f64);
//! assert!((e - 0.8427007929497149).abs() < 1e-14);
//!
//! // Complementary form evaluates small tails without cancellation
//! let tail = erfc(7.0_f64);
//! assert!(tail > 0.0 && tail < 1e-21);
//!
//! // Inverse round-trip
//! let x = erfc_inv(0.5_f64);
//! assert!((erfc(x) - 0.5).abs() < 1e-14);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

// Re-export the most commonly used items at crate level
pub use traits::ContinuousDistribution;
pub use types::{DistributionError, SolverError};
