//! Univariate continuous distributions.
//!
//! Each distribution here is an immutable value object validated once at
//! construction, implementing the `ContinuousDistribution` capability
//! trait from distr_core.
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: erfc-based tails, no cancellation in either
//!   direction
//! - **Totality**: Extreme in-domain arguments saturate, never raise

pub mod normal;

// Re-export main types at module level
pub use normal::Normal;
