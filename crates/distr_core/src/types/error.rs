//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from distribution construction and evaluation
//! - `SolverError`: Errors from the bracketing root-finder

use thiserror::Error;

/// Categorised distribution errors.
///
/// Both variants surface caller contract violations immediately; nothing is
/// retried or recovered internally. All in-domain evaluations are total and
/// never produce an error, however extreme the argument.
///
/// # Variants
/// - `InvalidParameter`: Rejected at construction, never afterwards
/// - `OutOfRange`: Probability argument outside `[0, 1]`
/// - `InvalidInterval`: Interval probability with inverted bounds
///
/// # Examples
/// ```
/// use distr_core::types::DistributionError;
///
/// let err = DistributionError::OutOfRange { probability: 1.5 };
/// assert_eq!(format!("{}", err), "Probability out of range [0, 1]: 1.5");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// Invalid distribution parameter (non-finite, or out of the valid range).
    #[error("Invalid distribution parameter: {reason}")]
    InvalidParameter {
        /// Description of the rejected parameter
        reason: String,
    },

    /// Probability argument outside `[0, 1]` (NaN included).
    #[error("Probability out of range [0, 1]: {probability}")]
    OutOfRange {
        /// The rejected probability value
        probability: f64,
    },

    /// Interval probability requested with `lower > upper`.
    #[error("Invalid interval: lower = {lower} exceeds upper = {upper}")]
    InvalidInterval {
        /// Lower interval endpoint
        lower: f64,
        /// Upper interval endpoint
        upper: f64,
    },
}

/// Errors from the bracketing root-finder.
///
/// The solver itself is total once a valid bracket is supplied: exhausting
/// the iteration budget returns the best estimate, not an error. The only
/// failure mode is an invalid bracket.
///
/// # Examples
/// ```
/// use distr_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
/// assert!(format!("{}", err).contains("same sign"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// `f(a)` and `f(b)` have the same sign, so `[a, b]` brackets no root.
    #[error("No bracket: f(a) and f(b) have the same sign on [{a}, {b}]")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
}
