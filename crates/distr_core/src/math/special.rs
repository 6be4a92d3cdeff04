//! Error function kernel: `erf`, `erfc` and their inverses.
//!
//! The forward pair uses the rational Chebyshev approximations of
//! W. J. Cody ("Rational Chebyshev approximation for the error function",
//! Math. Comp. 23, 1969) over three argument ranges, giving close to full
//! double precision. `erfc` evaluates small tail probabilities directly,
//! without the catastrophic cancellation of `1 - erf(x)`, and stays
//! non-zero well into the subnormal range before underflowing
//! monotonically to exactly zero.
//!
//! The inverse pair uses a rational initial approximation (central and
//! tail branches) polished by a fixed number of Newton steps against the
//! forward functions, so inversion is total: no input can trigger a
//! convergence failure.
//!
//! All functions are generic over `T: Float` to support both `f64` and
//! `f32` through the same code path; the saturation thresholds then follow
//! the width of the chosen type.

use num_traits::Float;

/// Switch point between the central `erf` expansion and the `erfc` tail
/// expansions (Cody's THRESH).
const THRESH: f64 = 0.46875;

/// Arguments below this contribute nothing beyond the leading term of the
/// central expansion.
const XSMALL: f64 = 1.11e-16;

/// Beyond this `exp(-x*x)` is unrepresentable even as a subnormal, so
/// `erfc` is exactly 0 (2 on the negative side).
const XHUGE: f64 = 27.5;

/// 1 / sqrt(pi).
const FRAC_1_SQRT_PI: f64 = 0.564_189_583_547_756_3;

/// sqrt(pi) / 2, the reciprocal of `d/dx erf(x)` at 0.
const FRAC_SQRT_PI_2: f64 = 0.886_226_925_452_758;

// Cody coefficients, central range |x| <= 0.46875.
const ERF_P: [f64; 5] = [
    3.161_123_743_870_565_6e0,
    1.138_641_541_510_501_56e2,
    3.774_852_376_853_020_2e2,
    3.209_377_589_138_469_47e3,
    1.857_777_061_846_031_53e-1,
];
const ERF_Q: [f64; 4] = [
    2.360_129_095_234_412_09e1,
    2.440_246_379_344_441_73e2,
    1.282_616_526_077_372_28e3,
    2.844_236_833_439_170_62e3,
];

// Cody coefficients, mid range 0.46875 < x <= 4.
const ERFC_P: [f64; 9] = [
    5.641_884_969_886_700_9e-1,
    8.883_149_794_388_375_94e0,
    6.611_919_063_714_162_95e1,
    2.986_351_381_974_001_31e2,
    8.819_522_212_417_690_9e2,
    1.712_047_612_634_070_58e3,
    2.051_078_377_826_071_47e3,
    1.230_339_354_797_997_25e3,
    2.153_115_354_744_038_46e-8,
];
const ERFC_Q: [f64; 8] = [
    1.574_492_611_070_983_47e1,
    1.176_939_508_913_124_99e2,
    5.371_811_018_620_098_58e2,
    1.621_389_574_566_690_19e3,
    3.290_799_235_733_459_63e3,
    4.362_619_090_143_247_16e3,
    3.439_367_674_143_721_64e3,
    1.230_339_354_803_749_42e3,
];

// Cody coefficients, far tail x > 4.
const TAIL_P: [f64; 6] = [
    3.053_266_349_612_323_44e-1,
    3.603_448_999_498_044_39e-1,
    1.257_817_261_112_292_46e-1,
    1.608_378_514_874_227_66e-2,
    6.587_491_615_298_378_03e-4,
    1.631_538_713_730_209_78e-2,
];
const TAIL_Q: [f64; 5] = [
    2.568_520_192_289_822_42e0,
    1.872_952_849_923_460_47e0,
    5.279_051_029_514_284_12e-1,
    6.051_834_131_244_131_91e-2,
    2.335_204_976_268_691_85e-3,
];

// Inverse kernel: rational initial approximations ("libit" coefficient
// sets), central branch in z^2, tail branch in sqrt(-ln(q/2)).
const INV_CENTRAL_P: [f64; 4] = [0.886_226_899, -1.645_349_621, 0.914_624_893, -0.140_543_331];
const INV_CENTRAL_Q: [f64; 4] = [-2.118_377_725, 1.442_710_462, -0.329_097_515, 0.012_229_801];
const INV_TAIL_P: [f64; 4] = [-1.970_840_454, -1.624_906_493, 3.429_567_803, 1.641_345_311];
const INV_TAIL_Q: [f64; 2] = [3.543_889_2, 1.637_067_8];

/// Lift an `f64` coefficient into the working float type.
#[inline(always)]
fn cst<T: Float>(v: f64) -> T {
    T::from(v).unwrap()
}

/// Error function.
///
/// # Mathematical Definition
/// erf(x) = (2/√π) ∫₀ˣ e^(-t²) dt
///
/// # Accuracy
/// Relative error below a few ulp across the full finite range. For
/// |x| ≳ 6 the result rounds to ±1 exactly, which is the correctly
/// rounded double value.
///
/// # Examples
/// ```
/// use distr_core::math::special::erf;
///
/// assert!(erf(0.0_f64).abs() < 1e-16);
/// assert!((erf(1.0_f64) - 0.8427007929497149).abs() < 1e-14);
/// assert_eq!(erf(f64::INFINITY), 1.0);
/// assert_eq!(erf(f64::NEG_INFINITY), -1.0);
/// ```
pub fn erf<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let y = x.abs();
    if y <= cst(THRESH) {
        return erf_central(x);
    }

    // erf(x) = sign(x) * (1 - erfc(|x|))
    let e = erfc_positive(y);
    if x < T::zero() {
        e - T::one()
    } else {
        T::one() - e
    }
}

/// Complementary error function.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫ₓ^∞ e^(-t²) dt
///
/// Preferred over `1 - erf(x)` for positive arguments: the tail is
/// evaluated directly, so `erfc(10)` retains full relative precision where
/// the subtraction would return 0.
///
/// # Saturation
/// The result underflows monotonically through the subnormal range and
/// reaches exactly 0 once `exp(-x²)` is unrepresentable (x ≈ 27.3 for
/// `f64`). Negative arguments saturate at 2 symmetrically.
///
/// # Examples
/// ```
/// use distr_core::math::special::erfc;
///
/// assert!((erfc(0.0_f64) - 1.0).abs() < 1e-16);
/// assert!((erfc(1.0_f64) - 0.15729920705028513).abs() < 1e-15);
/// // Far tail keeps relative precision
/// let t = erfc(10.0_f64);
/// assert!((t / 2.088487583762545e-45 - 1.0).abs() < 1e-12);
/// ```
pub fn erfc<T: Float>(x: T) -> T {
    if x.is_nan() {
        return x;
    }

    let y = x.abs();
    if y <= cst(THRESH) {
        return T::one() - erf_central(x);
    }

    let e = erfc_positive(y);
    if x < T::zero() {
        cst::<T>(2.0) - e
    } else {
        e
    }
}

/// Central-range erf via the P/Q rational in x².
fn erf_central<T: Float>(x: T) -> T {
    let ysq = if x.abs() > cst(XSMALL) {
        x * x
    } else {
        T::zero()
    };

    let mut num = cst::<T>(ERF_P[4]) * ysq;
    let mut den = ysq;
    for i in 0..3 {
        num = (num + cst(ERF_P[i])) * ysq;
        den = (den + cst(ERF_Q[i])) * ysq;
    }
    x * (num + cst(ERF_P[3])) / (den + cst(ERF_Q[3]))
}

/// erfc for y > THRESH, y >= 0.
fn erfc_positive<T: Float>(y: T) -> T {
    if y > cst(XHUGE) {
        return T::zero();
    }

    if y <= cst(4.0) {
        let mut num = cst::<T>(ERFC_P[8]) * y;
        let mut den = y;
        for i in 0..7 {
            num = (num + cst(ERFC_P[i])) * y;
            den = (den + cst(ERFC_Q[i])) * y;
        }
        let r = (num + cst(ERFC_P[7])) / (den + cst(ERFC_Q[7]));
        scaled_exp_neg_sq(y) * r
    } else {
        let ysq = (y * y).recip();
        let mut num = cst::<T>(TAIL_P[5]) * ysq;
        let mut den = ysq;
        for i in 0..4 {
            num = (num + cst(TAIL_P[i])) * ysq;
            den = (den + cst(TAIL_Q[i])) * ysq;
        }
        let r = ysq * (num + cst(TAIL_P[4])) / (den + cst(TAIL_Q[4]));
        scaled_exp_neg_sq(y) * ((cst::<T>(FRAC_1_SQRT_PI) - r) / y)
    }
}

/// `exp(-y²)` with the argument split to preserve tail precision.
///
/// Rounding y to a multiple of 1/16 makes `z²` exact, so the large part of
/// the exponent carries no rounding error; the remainder `(y-z)(y+z)` is
/// small and cheap to exponentiate accurately.
#[inline]
fn scaled_exp_neg_sq<T: Float>(y: T) -> T {
    let sixteen = cst::<T>(16.0);
    let z = (y * sixteen).trunc() / sixteen;
    let del = (y - z) * (y + z);
    (-z * z).exp() * (-del).exp()
}

/// Inverse error function, the x with `erf(x) = z` for z ∈ (-1, 1).
///
/// Boundary arguments return the exact limits: `erf_inv(-1)` is -∞ and
/// `erf_inv(1)` is +∞. Arguments outside `[-1, 1]` return NaN.
///
/// # Algorithm
/// Rational initial approximation (central branch for |z| ≤ 0.7, tail
/// branch in `sqrt(-ln((1-|z|)/2))` otherwise), then two Newton steps
/// against the forward `erf`/`erfc`. The iteration count is fixed, so the
/// inversion is total over the open interval.
///
/// # Examples
/// ```
/// use distr_core::math::special::{erf, erf_inv};
///
/// let x = erf_inv(0.5_f64);
/// assert!((x - 0.4769362762044699).abs() < 1e-13);
/// assert!((erf(erf_inv(0.999_f64)) - 0.999).abs() < 1e-14);
/// assert_eq!(erf_inv(1.0_f64), f64::INFINITY);
/// ```
pub fn erf_inv<T: Float>(z: T) -> T {
    if z.is_nan() {
        return z;
    }

    let one = T::one();
    if z <= -one {
        return if z == -one { T::neg_infinity() } else { T::nan() };
    }
    if z >= one {
        return if z == one { T::infinity() } else { T::nan() };
    }

    if z.abs() <= cst(0.7) {
        refine_central(inv_central(z), z)
    } else {
        // 1 - |z| is exact here (both operands within a factor of two)
        let q = one - z.abs();
        let x = refine_tail(inv_tail(q), q);
        if z < T::zero() {
            -x
        } else {
            x
        }
    }
}

/// Inverse complementary error function, the x with `erfc(x) = q` for
/// q ∈ (0, 2).
///
/// The tail is taken directly from `q`, so probabilities down to the
/// smallest subnormal invert to a finite, correctly-signed result; there
/// is no cancellation and no convergence failure path. Boundaries map to
/// the exact limits (`erfc_inv(0)` = +∞, `erfc_inv(2)` = -∞); arguments
/// outside `[0, 2]` return NaN.
///
/// # Examples
/// ```
/// use distr_core::math::special::{erfc, erfc_inv};
///
/// assert!(erfc_inv(1.0_f64).abs() < 1e-16);
/// let x = erfc_inv(1e-20_f64);
/// assert!((erfc(x) / 1e-20 - 1.0).abs() < 1e-10);
/// // Subnormal tails stay finite
/// assert!(erfc_inv(1e-320_f64).is_finite());
/// ```
pub fn erfc_inv<T: Float>(q: T) -> T {
    if q.is_nan() {
        return q;
    }

    let zero = T::zero();
    let two = cst::<T>(2.0);
    if q <= zero {
        return if q == zero { T::infinity() } else { T::nan() };
    }
    if q >= two {
        return if q == two { T::neg_infinity() } else { T::nan() };
    }

    // erfc(-x) = 2 - erfc(x); 2 - q is exact for q in [1, 2]
    if q > T::one() {
        return -erfc_inv(two - q);
    }

    let a = T::one() - q;
    if a <= cst(0.7) {
        refine_central(inv_central(a), a)
    } else {
        refine_tail(inv_tail(q), q)
    }
}

/// Central rational initial guess for `erf_inv(z)`, |z| <= 0.7.
fn inv_central<T: Float>(z: T) -> T {
    let w = z * z;
    let num = ((cst::<T>(INV_CENTRAL_P[3]) * w + cst(INV_CENTRAL_P[2])) * w
        + cst(INV_CENTRAL_P[1]))
        * w
        + cst(INV_CENTRAL_P[0]);
    let den = (((cst::<T>(INV_CENTRAL_Q[3]) * w + cst(INV_CENTRAL_Q[2])) * w
        + cst(INV_CENTRAL_Q[1]))
        * w
        + cst(INV_CENTRAL_Q[0]))
        * w
        + T::one();
    z * num / den
}

/// Tail rational initial guess for `erfc_inv(q)`, q < 0.3, as a function of
/// `w = sqrt(-ln(q/2))`. Written as `ln 2 - ln q` so subnormal q does not
/// underflow inside the logarithm.
fn inv_tail<T: Float>(q: T) -> T {
    let w = (cst::<T>(std::f64::consts::LN_2) - q.ln()).sqrt();
    let num = ((cst::<T>(INV_TAIL_P[3]) * w + cst(INV_TAIL_P[2])) * w + cst(INV_TAIL_P[1])) * w
        + cst(INV_TAIL_P[0]);
    let den = (cst::<T>(INV_TAIL_Q[1]) * w + cst(INV_TAIL_Q[0])) * w + T::one();
    num / den
}

/// Two Newton steps of `erf(x) = target` around a central-region guess.
fn refine_central<T: Float>(mut x: T, target: T) -> T {
    for _ in 0..2 {
        let residual = erf(x) - target;
        x = x - residual * cst(FRAC_SQRT_PI_2) * (x * x).exp();
    }
    x
}

/// Three Newton steps of `erfc(x) = q` around a tail-region guess.
///
/// Three steps close the gap from the rational guess even at the far end
/// of the normal range (x ≈ 26), where convergence is slowed by the large
/// curvature ratio f''/f' = -2x. Skipped once `exp(x²)` would overflow
/// (x ≳ 26.5, i.e. q already subnormal); there the rational guess is the
/// best finite answer available at this precision.
fn refine_tail<T: Float>(mut x: T, q: T) -> T {
    if x > cst(26.5) {
        return x;
    }
    for _ in 0..3 {
        let residual = erfc(x) - q;
        x = x + residual * cst(FRAC_SQRT_PI_2) * (x * x).exp();
    }
    x
}
