//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for distribution and solver operations
//!
//! # Re-exports
//!
//! For convenience, the error types are re-exported at this module level:
//! - [`DistributionError`], [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{DistributionError, SolverError};
