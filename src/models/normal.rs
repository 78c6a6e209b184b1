//! Standard normal density and distribution functions used by the pricing kernel.
//!
//! [`cdf`] is the Abramowitz & Stegun 26.2.17 rational approximation, accurate to
//! roughly `7.5e-8` absolute. It is what [`crate::models::bs`] prices with, so
//! every price and Greek inherits that error. [`cdf_exact`] evaluates the same
//! quantity through `erfc` and is only meant as a yardstick (tests, diagnostics,
//! anything precision-sensitive such as a root-finder built on top of the kernel).

/// `1 / sqrt(2π)`
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_53;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Standard normal probability density `φ(x)`.
pub fn pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Standard normal cumulative distribution `Φ(x)` (A&S 26.2.17).
///
/// The polynomial is evaluated on `|x|`, which gives the lower tail
/// `Φ(-|x|)`; for `x > 0` the result is reflected as `1 - Φ(-x)`.
/// `NaN` propagates, `±∞` map to `1` and `0`.
pub fn cdf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + P * x.abs());
    let d = INV_SQRT_2PI * (-x * x / 2.0).exp();
    let tail = d * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));

    if x > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

/// Reference `Φ(x)` computed as `erfc(-x / √2) / 2`.
///
/// Never used by the pricing formulas.
pub fn cdf_exact(x: f64) -> f64 {
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_peak_and_symmetry() {
        assert!((pdf(0.0) - INV_SQRT_2PI).abs() < 1e-15);
        assert_eq!(pdf(1.3), pdf(-1.3));
        assert!(pdf(10.0) < 1e-20);
    }

    #[test]
    fn test_cdf_midpoint() {
        assert!((cdf(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cdf_reflection() {
        for &x in &[0.1, 0.5, 1.0, 1.96, 3.0, 6.5] {
            assert!((cdf(-x) - (1.0 - cdf(x))).abs() < 1e-15, "x = {}", x);
        }
    }

    #[test]
    fn test_cdf_within_design_precision() {
        let mut x = -8.0;
        while x <= 8.0 {
            let err = (cdf(x) - cdf_exact(x)).abs();
            assert!(err < 1e-7, "cdf({}) off by {}", x, err);
            x += 0.01;
        }
    }

    #[test]
    fn test_cdf_non_finite_inputs() {
        assert!(cdf(f64::NAN).is_nan());
        assert_eq!(cdf(f64::INFINITY), 1.0);
        assert_eq!(cdf(f64::NEG_INFINITY), 0.0);
    }
}
