//! The `ContinuousDistribution` capability trait.

use crate::math::solvers::{BrentSolver, SolverConfig};
use crate::types::DistributionError;
use num_traits::Float;

/// Number of bracket-widening rounds the default quantile search allows
/// before handing the bracket to the solver as-is.
const MAX_BRACKET_EXPANSIONS: usize = 64;

/// Capability set of a univariate continuous distribution.
///
/// The three fundamental operations — `density`, `cumulative_probability`
/// and `inverse_cumulative_probability` — plus the moment and support
/// accessors needed to drive the generic quantile fallback. Everything
/// here is a pure function of the immutable parameters and the argument,
/// so instances are freely shared across threads.
///
/// # Totality
///
/// Evaluations never fail for in-domain arguments, however extreme: tail
/// probabilities saturate at the representable boundaries instead of
/// raising, and the quantile search is bounded with a final-value
/// fallback. The only fallible calls are the quantile with an argument
/// outside `[0, 1]` and the interval probability with inverted bounds.
///
/// # Default quantile
///
/// `inverse_cumulative_probability` has a default implementation that
/// brackets the target probability using the Chebyshev inequality around
/// `(mean, variance)` and runs a bounded Brent search on the CDF.
/// Distributions with a closed-form inverse should override it.
pub trait ContinuousDistribution<T: Float> {
    /// Probability density at `x`. Returns 0 for arguments outside the
    /// support (non-finite arguments included).
    fn density(&self, x: T) -> T;

    /// Natural logarithm of the density at `x`.
    ///
    /// Distributions should override this with a direct formula where one
    /// exists; the default loses the far tails to underflow of `density`.
    fn log_density(&self, x: T) -> T {
        self.density(x).ln()
    }

    /// Probability of `X <= x`, in `[0, 1]`.
    fn cumulative_probability(&self, x: T) -> T;

    /// Probability of `X > x`, in `[0, 1]`.
    ///
    /// Override when the upper tail can be computed directly; the default
    /// complement loses precision once the CDF is close to 1.
    fn survival_probability(&self, x: T) -> T {
        T::one() - self.cumulative_probability(x)
    }

    /// Probability mass of the interval `(x0, x1]`.
    ///
    /// # Errors
    /// * `DistributionError::InvalidInterval` - `x0 > x1`
    fn probability(&self, x0: T, x1: T) -> Result<T, DistributionError> {
        if x0 > x1 {
            return Err(DistributionError::InvalidInterval {
                lower: x0.to_f64().unwrap_or(f64::NAN),
                upper: x1.to_f64().unwrap_or(f64::NAN),
            });
        }
        // Clamp away a negative sliver from rounding of the two CDFs
        let mass = self.cumulative_probability(x1) - self.cumulative_probability(x0);
        Ok(mass.max(T::zero()))
    }

    /// The quantile: an `x` with `cumulative_probability(x) ≈ p`.
    ///
    /// `p = 0` and `p = 1` map to the exact support bounds (±∞ for
    /// unbounded distributions). Every interior `p` produces a value —
    /// the search widens a moment-based bracket a bounded number of times
    /// and the solver returns its best estimate when its iteration budget
    /// runs out, so no input raises a convergence failure.
    ///
    /// # Errors
    /// * `DistributionError::OutOfRange` - `p` outside `[0, 1]` (or NaN)
    fn inverse_cumulative_probability(&self, p: T) -> Result<T, DistributionError> {
        if !(p >= T::zero() && p <= T::one()) {
            return Err(DistributionError::OutOfRange {
                probability: p.to_f64().unwrap_or(f64::NAN),
            });
        }
        if p == T::zero() {
            return Ok(self.support_lower_bound());
        }
        if p == T::one() {
            return Ok(self.support_upper_bound());
        }

        let one = T::one();
        let two = T::from(2.0).unwrap();
        let mu = self.mean();
        let sigma = self.variance().sqrt();

        // Chebyshev inequality bounds the p- and (1-p)-quantiles around
        // the mean; fall back to a unit bracket when moments are not
        // finite and rely on widening below
        let (mut lo, mut hi) = if mu.is_finite() && sigma.is_finite() {
            (
                mu - sigma * ((one - p) / p).sqrt(),
                mu + sigma * (p / (one - p)).sqrt(),
            )
        } else {
            (-one, one)
        };

        // Subnormal p overflows the Chebyshev ratio; the bracket endpoints
        // must stay inside the support and finite, or the solver would
        // accept an infinite endpoint as the root
        lo = lo.max(self.support_lower_bound());
        hi = hi.min(self.support_upper_bound());
        if !lo.is_finite() {
            lo = -T::max_value();
        }
        if !hi.is_finite() {
            hi = T::max_value();
        }

        let mut rounds = 0;
        while self.cumulative_probability(lo) > p && rounds < MAX_BRACKET_EXPANSIONS {
            lo = lo - (hi - lo);
            rounds += 1;
        }
        rounds = 0;
        while self.cumulative_probability(hi) < p && rounds < MAX_BRACKET_EXPANSIONS {
            hi = hi + (hi - lo);
            rounds += 1;
        }

        let solver = BrentSolver::new(SolverConfig::default());
        match solver.find_root(|x| self.cumulative_probability(x) - p, lo, hi) {
            Ok(x) => Ok(x),
            // Widening capped out without a sign change; the midpoint is
            // the best bounded answer available
            Err(_) => Ok((lo + hi) / two),
        }
    }

    /// Mean of the distribution.
    fn mean(&self) -> T;

    /// Variance of the distribution.
    fn variance(&self) -> T;

    /// Infimum of the support. Defaults to -∞.
    fn support_lower_bound(&self) -> T {
        T::neg_infinity()
    }

    /// Supremum of the support. Defaults to +∞.
    fn support_upper_bound(&self) -> T {
        T::infinity()
    }
}
