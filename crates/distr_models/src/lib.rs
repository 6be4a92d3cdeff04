//! # distr_models: Concrete Continuous Distributions
//!
//! ## Layer 2 (Model) Role
//!
//! distr_models builds on the distr_core kernel to provide concrete
//! distributions implementing the `ContinuousDistribution` capability
//! trait:
//! - `Normal`: Gaussian distribution with closed-form density, CDF and
//!   quantile (`continuous::normal`)
//!
//! ## Numerical Contract
//!
//! Every evaluation is total over its domain. Tail probabilities saturate
//! at the exact representable boundaries ("top-coding") instead of
//! raising, and quantile inversion is closed-form with a bounded
//! refinement, so no in-range probability can trigger a convergence
//! failure.
//!
//! ## Usage Examples
//!
//! ```rust
//! use distr_models::continuous::Normal;
//! use distr_core::traits::ContinuousDistribution;
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//!
//! // Density at the mode
//! assert!((n.density(0.0) - 0.3989422804014327).abs() < 1e-12);
//!
//! // CDF / quantile round-trip
//! let p = n.cumulative_probability(1.0);
//! let x = n.inverse_cumulative_probability(p).unwrap();
//! assert!((x - 1.0).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod continuous;

// Re-export main types at crate level
pub use continuous::Normal;
