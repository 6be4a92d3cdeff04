//! Reference-value tests for the normal distribution.
//!
//! Expected values come from R 3.x (`dnorm`, `pnorm`, `qnorm`) and from
//! long-standing regression scenarios for Gaussian tail evaluation:
//! extreme-argument saturation, deep lower-tail relative accuracy, and
//! quantile inversion at probabilities that historically failed to
//! converge under bracketing solvers.

use approx::assert_relative_eq;
use distr_core::traits::ContinuousDistribution;
use distr_core::types::DistributionError;
use distr_models::continuous::Normal;

fn reference() -> Normal<f64> {
    Normal::new(2.1, 1.4).unwrap()
}

fn standard() -> Normal<f64> {
    Normal::new(0.0, 1.0).unwrap()
}

// ============================================================================
// R reference grid for N(2.1, 1.4)
// ============================================================================

/// Quantiles from R: qnorm(p, 2.1, 1.4) for the probabilities below.
const QUANTILE_POINTS: [f64; 10] = [
    -2.226325228634938,
    -1.156887023657177,
    -0.643949578356075,
    -0.2027950777320613,
    0.305827808237559,
    6.42632522863494,
    5.35688702365718,
    4.843949578356074,
    4.40279507773206,
    3.89417219176244,
];

const PROBABILITIES: [f64; 10] = [
    0.001, 0.01, 0.025, 0.05, 0.1, 0.999, 0.990, 0.975, 0.950, 0.900,
];

/// Densities from R: dnorm(x, 2.1, 1.4) at the quantile points.
const DENSITY_VALUES: [f64; 10] = [
    0.00240506434076,
    0.0190372444310,
    0.0417464784322,
    0.0736683145538,
    0.125355951380,
    0.00240506434076,
    0.0190372444310,
    0.0417464784322,
    0.0736683145538,
    0.125355951380,
];

#[test]
fn test_cumulative_probability_reference_grid() {
    let n = reference();
    for (x, p) in QUANTILE_POINTS.iter().zip(PROBABILITIES.iter()) {
        assert_relative_eq!(n.cumulative_probability(*x), *p, max_relative = 1e-9);
    }
}

#[test]
fn test_inverse_cumulative_probability_reference_grid() {
    let n = reference();
    for (x, p) in QUANTILE_POINTS.iter().zip(PROBABILITIES.iter()) {
        assert_relative_eq!(
            n.inverse_cumulative_probability(*p).unwrap(),
            *x,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_density_reference_grid() {
    let n = reference();
    for (x, d) in QUANTILE_POINTS.iter().zip(DENSITY_VALUES.iter()) {
        assert_relative_eq!(n.density(*x), *d, max_relative = 1e-9);
    }
}

// ============================================================================
// Sigma-multiple quantile grid
// ============================================================================

/// CDF at μ + kσ for k = -2, -1, 0, 1, 2, 3, 4, 5; parameter-free.
const SIGMA_CDF_VALUES: [f64; 8] = [
    0.02275013194817921,
    0.158655253931457,
    0.5,
    0.841344746068543,
    0.977249868051821,
    0.99865010196837,
    0.999968328758167,
    0.999999713348428,
];

const SIGMA_MULTIPLES: [f64; 8] = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

fn verify_sigma_grid(n: &Normal<f64>, densities: &[f64; 8]) {
    let mu = n.mean();
    let sigma = n.standard_deviation();
    for (k, (p, d)) in SIGMA_MULTIPLES
        .iter()
        .zip(SIGMA_CDF_VALUES.iter().zip(densities.iter()))
    {
        let x = mu + k * sigma;
        assert_relative_eq!(n.cumulative_probability(x), *p, max_relative = 1e-9);
        assert_relative_eq!(n.density(x), *d, max_relative = 1e-9);
        assert_relative_eq!(
            n.inverse_cumulative_probability(*p).unwrap(),
            x,
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn test_sigma_grid_reference_distribution() {
    verify_sigma_grid(
        &reference(),
        &[
            0.0385649760808,
            0.172836231799,
            0.284958771715,
            0.172836231799,
            0.0385649760808,
            0.00316560600853,
            9.55930184035e-05,
            1.06194251052e-06,
        ],
    );
}

#[test]
fn test_sigma_grid_standard_distribution() {
    verify_sigma_grid(
        &standard(),
        &[
            0.0539909665132,
            0.241970724519,
            0.398942280401,
            0.241970724519,
            0.0539909665132,
            0.00443184841194,
            0.000133830225765,
            1.48671951473e-06,
        ],
    );
}

#[test]
fn test_sigma_grid_narrow_distribution() {
    verify_sigma_grid(
        &Normal::new(0.0, 0.1).unwrap(),
        &[
            0.539909665132,
            2.41970724519,
            3.98942280401,
            2.41970724519,
            0.539909665132,
            0.0443184841194,
            0.00133830225765,
            1.48671951473e-05,
        ],
    );
}

// ============================================================================
// Extreme arguments and tail saturation
// ============================================================================

#[test]
fn test_cumulative_probability_infinite_arguments() {
    let n = standard();
    assert_eq!(n.cumulative_probability(f64::NEG_INFINITY), 0.0);
    assert_eq!(n.cumulative_probability(f64::INFINITY), 1.0);
    assert_eq!(n.cumulative_probability(-f64::MAX), 0.0);
    assert_eq!(n.cumulative_probability(f64::MAX), 1.0);
}

/// The lower tail stays strictly positive until erfc underflows, about
/// 38.6σ out; past that it saturates at exactly 0.
#[test]
fn test_lower_tail_saturation_point() {
    let n = standard();
    for i in 0..100 {
        let p = n.cumulative_probability(-(i as f64));
        if i < 39 {
            assert!(p > 0.0, "lower tail rounded to 0 at {} sigma", i);
        } else {
            assert_eq!(p, 0.0, "lower tail not saturated at {} sigma", i);
        }
    }
}

/// The upper tail rounds to exactly 1 once the complement drops below
/// half an ulp of 1, at 9σ.
#[test]
fn test_upper_tail_saturation_point() {
    let n = standard();
    for i in 0..100 {
        let p = n.cumulative_probability(i as f64);
        if i < 9 {
            assert!(p < 1.0, "upper tail saturated early at {} sigma", i);
        } else {
            assert_eq!(p, 1.0, "upper tail not saturated at {} sigma", i);
        }
    }
}

/// Deep lower tail keeps relative (not just absolute) accuracy.
#[test]
fn test_deep_lower_tail_relative_accuracy() {
    let n = standard();
    assert_relative_eq!(
        n.cumulative_probability(-10.0),
        7.61985302416053e-24,
        max_relative = 1e-5
    );
    // And further out, still a true subnormal-free value
    let p38 = n.cumulative_probability(-38.0);
    assert!(p38 > 0.0 && p38 < 1e-300);
}

#[test]
fn test_survival_probability_deep_upper_tail() {
    let n = standard();
    assert_relative_eq!(
        n.survival_probability(10.0),
        7.61985302416053e-24,
        max_relative = 1e-5
    );
}

// ============================================================================
// Quantile inversion regression scenarios
// ============================================================================

/// Probabilities that historically failed to converge under bracketing
/// quantile solvers must invert in closed form.
#[test]
fn test_quantile_regression_values() {
    let n = standard();
    let cases = [
        (0.9986501019683698, 3.0),
        (0.841344746068543, 1.0),
        (0.9999683287581673, 4.0),
        (0.9772498680518209, 2.0),
    ];
    for (p, expected) in cases {
        let x = n.inverse_cumulative_probability(p).unwrap();
        assert_relative_eq!(x, expected, epsilon = 1e-7);
    }
}

#[test]
fn test_quantile_boundary_probabilities() {
    let n = reference();
    assert_eq!(
        n.inverse_cumulative_probability(0.0).unwrap(),
        f64::NEG_INFINITY
    );
    assert_eq!(n.inverse_cumulative_probability(1.0).unwrap(), f64::INFINITY);
}

#[test]
fn test_quantile_rejects_out_of_range_probabilities() {
    let n = standard();
    for p in [-1e-9, 1.0 + 1e-9, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            n.inverse_cumulative_probability(p),
            Err(DistributionError::OutOfRange { .. })
        ));
    }
}

/// Subnormal and near-one probabilities resolve to finite quantiles with
/// the right sign and magnitude.
#[test]
fn test_quantile_subnormal_probabilities() {
    let n = standard();

    let x = n.inverse_cumulative_probability(5e-324).unwrap();
    assert!(x.is_finite() && x < -38.0, "qnorm(5e-324) = {}", x);

    let x = n.inverse_cumulative_probability(1e-300).unwrap();
    assert_relative_eq!(x, -37.0471, max_relative = 1e-4);

    let x = n
        .inverse_cumulative_probability(1.0 - f64::EPSILON / 2.0)
        .unwrap();
    assert!(x.is_finite() && x > 8.0);
}

// ============================================================================
// Parameters and moments
// ============================================================================

#[test]
fn test_parameter_accessors_echo_exactly() {
    let n = reference();
    assert_eq!(n.mean(), 2.1);
    assert_eq!(n.standard_deviation(), 1.4);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    assert!(matches!(
        Normal::new(1.0, 0.0),
        Err(DistributionError::InvalidParameter { .. })
    ));
    assert!(Normal::new(1.0, -1.5).is_err());
    assert!(Normal::new(f64::NAN, 1.0).is_err());
    assert!(Normal::new(1.0, f64::INFINITY).is_err());
}

#[test]
fn test_moments() {
    let n = reference();
    assert_relative_eq!(n.mean(), 2.1, epsilon = 1e-9);
    assert_relative_eq!(n.variance(), 1.4 * 1.4, epsilon = 1e-9);

    let far = Normal::new(-2000.9, 10.4).unwrap();
    assert_relative_eq!(far.mean(), -2000.9, epsilon = 1e-9);
    assert_relative_eq!(far.variance(), 10.4 * 10.4, epsilon = 1e-9);
}

/// Shifted distributions evaluate correctly far from the origin.
#[test]
fn test_far_shifted_distribution() {
    let n = Normal::new(-2000.9, 10.4).unwrap();
    assert_relative_eq!(n.cumulative_probability(-2000.9), 0.5, epsilon = 1e-14);
    assert_relative_eq!(
        n.inverse_cumulative_probability(0.5).unwrap(),
        -2000.9,
        max_relative = 1e-12
    );
    let sum =
        n.cumulative_probability(-2000.9 + 10.4) + n.cumulative_probability(-2000.9 - 10.4);
    assert_relative_eq!(sum, 1.0, epsilon = 1e-14);
}

// ============================================================================
// f32 support
// ============================================================================

#[test]
fn test_f32_evaluations() {
    let n = Normal::new(0.0_f32, 1.0).unwrap();
    assert_relative_eq!(n.density(0.0), 0.398_942_28_f32, max_relative = 1e-5);
    assert_relative_eq!(n.cumulative_probability(1.0), 0.841_344_7_f32, max_relative = 1e-5);
    let x = n.inverse_cumulative_probability(0.975_f32).unwrap();
    assert_relative_eq!(x, 1.959_964_f32, max_relative = 1e-4);
}
