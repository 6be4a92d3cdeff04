//! Bounded root-finding for quantile inversion.
//!
//! The distribution layer inverts a cumulative probability either through a
//! closed form (preferred) or, when none exists, through a bracketing
//! search on the CDF. That search must never surface a convergence
//! failure: historically, naive quantile solvers raised "max iterations
//! exceeded" for tail probabilities, turning an in-domain input into an
//! error. The [`BrentSolver`] here is therefore total over a valid
//! bracket — when the iteration budget runs out it returns the best
//! estimate found so far.
//!
//! ## Configuration
//!
//! [`SolverConfig`] carries the shared settings:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Iteration budget (default: 100)
//!
//! ## Example
//!
//! ```
//! use distr_core::math::solvers::{BrentSolver, SolverConfig};
//!
//! // Solve x³ - x - 2 = 0 in bracket [1, 2]
//! let solver = BrentSolver::new(SolverConfig::default());
//! let f = |x: f64| x * x * x - x - 2.0;
//!
//! let root = solver.find_root(f, 1.0, 2.0).unwrap();
//! assert!(f(root).abs() < 1e-9);
//! ```

mod brent;
mod config;

// Re-export public types at module level
pub use brent::BrentSolver;
pub use config::SolverConfig;
