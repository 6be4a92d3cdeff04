//! Numerical routines underpinning the distribution layer.
//!
//! This module provides:
//! - `special`: Error function kernel (`erf`, `erfc`, `erf_inv`, `erfc_inv`)
//! - `solvers`: Bounded bracketing root-finder for quantile fallback

pub mod solvers;
pub mod special;
