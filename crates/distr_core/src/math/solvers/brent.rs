//! Brent's method with a total convergence contract.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Brent's method root finder.
///
/// Combines bisection, the secant method, and inverse quadratic
/// interpolation; no derivatives required. Given a valid bracket the
/// search always terminates with a value: if the iteration budget is
/// exhausted before the tolerance is met, the best estimate found so far
/// is returned rather than an error. The only failure mode is a bracket
/// whose endpoints do not straddle a sign change.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use distr_core::math::solvers::{BrentSolver, SolverConfig};
///
/// let solver = BrentSolver::new(SolverConfig::default());
///
/// // Solve x² - 2 = 0 in bracket [0, 2]
/// let f = |x: f64| x * x - 2.0;
/// let root = solver.find_root(f, 0.0, 2.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BrentSolver<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> BrentSolver<T> {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Find a root of `f` in the bracket `[a, b]`.
    ///
    /// Requires `f(a)` and `f(b)` to have opposite signs (a zero at either
    /// endpoint counts). Within the bracket the search is total: it
    /// returns after at most `max_iterations` steps with the current best
    /// estimate, whether or not the tolerance was reached. Iterates never
    /// leave the bracket, so the estimate always lies in `[a, b]`.
    ///
    /// # Errors
    ///
    /// * `SolverError::NoBracket` - `f(a)` and `f(b)` have the same sign
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        let mut fa = f(a);
        let mut fb = f(b);

        if fa * fb > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Keep b the endpoint with the smaller residual
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }

        let mut c = a;
        let mut fc = fa;
        let mut d = b - a;
        let mut e = d;

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let tol = self.config.tolerance;

        for _ in 0..self.config.max_iterations {
            if fb.abs() < tol {
                return Ok(b);
            }

            let m = (c - b) / two;
            if m.abs() <= tol {
                return Ok(b);
            }

            // Try an interpolation step; fall back to bisection when the
            // candidate leaves the bracket [b, c] or grows faster than the
            // previous step allows
            let use_bisection;
            if fa != fc && fb != fc {
                // Inverse quadratic interpolation
                let r = fb / fc;
                let s = fb / fa;
                let t = fa / fc;

                let p = s * (t * (r - t) * (c - b) - (T::one() - r) * (b - a));
                let q = (t - T::one()) * (r - T::one()) * (s - T::one());

                let cand = b + p / q;
                if (cand - b) * (cand - c) < T::zero()
                    && p.abs() < (three * m * q).abs() / two
                    && p.abs() < (e * q).abs() / two
                {
                    e = d;
                    d = p / q;
                    use_bisection = false;
                } else {
                    use_bisection = true;
                }
            } else if fb != fa {
                // Secant step
                let s = fb / fa;
                let p = two * m * s;
                let q = T::one() - s;

                let cand = b + p / q;
                if (cand - b) * (cand - c) < T::zero()
                    && p.abs() < (three * m * q).abs() / two
                    && p.abs() < (e * q).abs() / two
                {
                    e = d;
                    d = p / q;
                    use_bisection = false;
                } else {
                    use_bisection = true;
                }
            } else {
                use_bisection = true;
            }

            if use_bisection {
                d = m;
                e = m;
            }

            a = b;
            fa = fb;

            if d.abs() > tol {
                b = b + d;
            } else {
                // Minimum step towards the midpoint
                b = b + if m > T::zero() { tol } else { -tol };
            }

            fb = f(b);

            // Restore a valid bracket after the step
            if (fb > T::zero() && fc > T::zero()) || (fb < T::zero() && fc < T::zero()) {
                c = a;
                fc = fa;
                d = b - a;
                e = d;
            }

            if fc.abs() < fb.abs() {
                a = b;
                b = c;
                c = a;
                fa = fb;
                fb = fc;
                fc = fa;
            }
        }

        // Budget exhausted: the best estimate stands in for a raised
        // convergence error
        Ok(b)
    }
}
