//! Core traits for continuous distributions.
//!
//! This module defines the capability-set interface a distribution
//! exposes: density, cumulative probability and quantile, plus the moment
//! and support accessors the generic quantile fallback needs. Conforming
//! types implement the capabilities directly; there is no base-class
//! hierarchy to extend.
//!
//! Generic numeric code throughout the workspace is written against
//! `num_traits::Float`, re-exported here for convenience.

/// Generic floating-point trait for numeric computations.
///
/// A unified bound for the floating-point types distributions are generic
/// over (`f64`, `f32`).
///
/// # Examples
/// ```
/// use distr_core::traits::Float;
///
/// fn standardise<T: Float>(x: T, mu: T, sigma: T) -> T {
///     (x - mu) / sigma
/// }
///
/// let z: f64 = standardise(3.0, 1.0, 2.0);
/// assert_eq!(z, 1.0);
/// ```
pub use num_traits::Float;

pub mod distribution;

pub use distribution::ContinuousDistribution;
