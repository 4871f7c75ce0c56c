//! Two-variable confluent hypergeometric function of the bi-Maxwellian
//! collision integrals.
//!
//! F(a,b;c;x,y) = Γ(c)/(Γ(a)·Γ(c−a)) ·
//!     ∫₀¹ t^(a−1) · (1−t)^(c−a−1) · (1−t·x)^(−b) · exp(t·y/(1−t·x)) dt
//!
//! Two evaluations are provided:
//!
//! - [`evaluate_hypergeometric`]: left-Riemann quadrature of the integral over
//!   N = 10^precision points t_k = k/N, k = 0..N−1. The endpoint t = 1 is never
//!   sampled, which keeps the (1−t)^(−1/2) weight of the (2, ½; 5/2) term
//!   finite. That term converges only as N^(−1/2).
//! - [`hypergeometric_series`]: the double series obtained by expanding the
//!   kernel in powers of x and y,
//!
//!   F = Σ_{m,n≥0} (a)_{m+n}/(c)_{m+n} · (b+n)_m/m! · x^m · y^n/n!
//!
//!   which converges for |x| < 1.
//!
//! [`hypergeometric_difference_series`] sums F(a_hi) − F(a_lo) coefficient by
//! coefficient. The zeroth-order terms cancel exactly, so the difference of
//! two nearly equal functions is formed without subtracting two independently
//! rounded estimates.
//!
//! Reference: Hellinger & Trávníček, Phys Plasmas 16, 054501 (2009), Eq. (9)

use statrs::function::gamma::gamma;

use super::TransportError;

/// Highest supported quadrature precision (10⁹ samples)
pub const MAX_QUADRATURE_PRECISION: u32 = 9;

/// Minimum admissible value of 1 − t·x at any sample point
pub const POLE_TOLERANCE: f64 = 1e-12;

/// Largest |x| the direct series is used for
pub const SERIES_MAX_ABS_X: f64 = 0.9;

/// Highest total order m + n summed by the direct series
pub const SERIES_MAX_ORDER: usize = 600;

/// Relative size at which a series term is treated as negligible
const SERIES_TOLERANCE: f64 = 1e-17;

/// Neumaier-compensated running sum
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - total) + value;
        } else {
            self.compensation += (value - total) + self.sum;
        }
        self.sum = total;
    }

    fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

/// Number of quadrature samples for a precision, 10^precision
pub fn sample_count(precision: u32) -> Result<u64, TransportError> {
    if precision > MAX_QUADRATURE_PRECISION {
        return Err(TransportError::InvalidPrecision {
            precision,
            max: MAX_QUADRATURE_PRECISION,
        });
    }
    Ok(10u64.pow(precision))
}

fn check_shape(x: f64, y: f64, a: f64, b: f64, c: f64) -> Result<(), TransportError> {
    for (name, value) in [("x", x), ("y", y), ("a", a), ("b", b), ("c", c)] {
        if !value.is_finite() {
            return Err(TransportError::domain(name, value, "hypergeometric argument must be finite"));
        }
    }
    if a <= 0.0 {
        return Err(TransportError::domain("a", a, "must be positive"));
    }
    if c <= a {
        return Err(TransportError::domain("c", c, "must exceed a"));
    }
    Ok(())
}

/// Γ(c)/(Γ(a)·Γ(c−a))
fn beta_normalization(a: f64, c: f64) -> f64 {
    gamma(c) / (gamma(a) * gamma(c - a))
}

/// Evaluate F(a,b;c;x,y) by left-Riemann quadrature of its integral form
///
/// # Arguments
/// * `x` - 1 − A12; must keep 1 − t·x above [`POLE_TOLERANCE`] for t in [0,1)
/// * `y` - A12·Δv²/(4·v12∥²)
/// * `a`, `b`, `c` - shape parameters, a > 0 and c > a
/// * `precision` - 10^precision samples; cost is linear in the sample count
///
/// # Errors
/// `NumericalDomain` if a sample reaches or crosses the pole at t·x = 1 or a
/// term is not finite, `Domain` for invalid shape parameters,
/// `InvalidPrecision` above [`MAX_QUADRATURE_PRECISION`].
pub fn evaluate_hypergeometric(
    x: f64,
    y: f64,
    a: f64,
    b: f64,
    c: f64,
    precision: u32,
) -> Result<f64, TransportError> {
    evaluate_hypergeometric_scaled(x, y, a, b, c, precision, 0.0)
}

/// Evaluate exp(log_scale)·F(a,b;c;x,y) by the same quadrature
///
/// The scale is folded into the exponent of each sample, so a large y paired
/// with a matching negative `log_scale` stays finite where F alone overflows.
pub(crate) fn evaluate_hypergeometric_scaled(
    x: f64,
    y: f64,
    a: f64,
    b: f64,
    c: f64,
    precision: u32,
    log_scale: f64,
) -> Result<f64, TransportError> {
    let samples = sample_count(precision)?;
    check_shape(x, y, a, b, c)?;
    if !log_scale.is_finite() {
        return Err(TransportError::domain("log_scale", log_scale, "must be finite"));
    }

    let n = samples as f64;
    let dt = 1.0 / n;
    let mut sum = CompensatedSum::default();

    for k in 0..samples {
        let t = k as f64 / n;
        let denominator = 1.0 - t * x;
        if denominator <= POLE_TOLERANCE {
            return Err(TransportError::numerical(x, t, "pole in (1 - t*x)^-b"));
        }

        let weight = t.powf(a - 1.0) * (1.0 - t).powf(c - a - 1.0);
        let kernel = denominator.powf(-b) * (t * y / denominator + log_scale).exp();
        let term = weight * kernel;
        if !term.is_finite() {
            return Err(TransportError::numerical(x, t, "integrand is not finite"));
        }
        sum.add(term);
    }

    let estimate = beta_normalization(a, c) * sum.total() * dt;
    if !estimate.is_finite() {
        return Err(TransportError::numerical(x, 1.0, "quadrature estimate is not finite"));
    }
    Ok(estimate)
}

/// Pochhammer ratios (a)_k/(c)_k for k = 0..len
fn pochhammer_ratios(a: f64, c: f64, len: usize) -> Vec<f64> {
    let mut ratios = Vec::with_capacity(len);
    let mut ratio = 1.0;
    for k in 0..len {
        if k > 0 {
            let j = (k - 1) as f64;
            ratio *= (a + j) / (c + j);
        }
        ratios.push(ratio);
    }
    ratios
}

/// Σ coefficients[m+n] · (b+n)_m/m! · x^m · y^n/n!
fn double_series(x: f64, y: f64, b: f64, coefficients: &[f64]) -> Result<f64, TransportError> {
    if x.abs() > SERIES_MAX_ABS_X {
        return Err(TransportError::numerical(x, 0.0, "outside series convergence region"));
    }

    let max_order = coefficients.len();
    let mut total = CompensatedSum::default();
    let mut y_weight = 1.0;

    for n in 0..max_order {
        if n > 0 {
            y_weight *= y / n as f64;
        }

        let mut row = CompensatedSum::default();
        let mut x_weight = 1.0;
        let mut previous = f64::INFINITY;
        let mut row_converged = false;

        for m in 0..(max_order - n) {
            if m > 0 {
                x_weight *= (b + (n + m - 1) as f64) * x / m as f64;
            }
            let term = coefficients[n + m] * x_weight * y_weight;
            row.add(term);

            let magnitude = term.abs();
            if m > 0 && magnitude <= previous && magnitude <= SERIES_TOLERANCE * row.total().abs() {
                row_converged = true;
                break;
            }
            if x_weight == 0.0 || y_weight == 0.0 {
                row_converged = true;
                break;
            }
            previous = magnitude;
        }

        if !row_converged {
            return Err(TransportError::numerical(x, 0.0, "series row did not converge"));
        }

        let row_total = row.total();
        total.add(row_total);
        if !total.total().is_finite() {
            return Err(TransportError::numerical(x, 0.0, "series sum is not finite"));
        }

        // Rows peak near n ≈ y; only stop once past the peak
        if n as f64 > y.abs() && row_total.abs() <= SERIES_TOLERANCE * total.total().abs() {
            return Ok(total.total());
        }
    }

    Err(TransportError::numerical(x, 0.0, "series did not converge"))
}

/// Evaluate F(a,b;c;x,y) from its double power series
///
/// Valid for |x| ≤ [`SERIES_MAX_ABS_X`]; outside that region, or if the series
/// does not settle within [`SERIES_MAX_ORDER`] terms, returns `NumericalDomain`.
pub fn hypergeometric_series(x: f64, y: f64, a: f64, b: f64, c: f64) -> Result<f64, TransportError> {
    check_shape(x, y, a, b, c)?;
    let coefficients = pochhammer_ratios(a, c, SERIES_MAX_ORDER);
    double_series(x, y, b, &coefficients)
}

/// Evaluate F(a_hi,b;c;x,y) − F(a_lo,b;c;x,y) directly from the series
///
/// The zeroth-order coefficients are both 1 and cancel exactly, so the
/// isotropic, drift-free limit (x = y = 0) returns exactly 0.
pub fn hypergeometric_difference_series(
    x: f64,
    y: f64,
    a_hi: f64,
    a_lo: f64,
    b: f64,
    c: f64,
) -> Result<f64, TransportError> {
    check_shape(x, y, a_hi, b, c)?;
    check_shape(x, y, a_lo, b, c)?;

    let hi = pochhammer_ratios(a_hi, c, SERIES_MAX_ORDER);
    let lo = pochhammer_ratios(a_lo, c, SERIES_MAX_ORDER);
    let coefficients: Vec<f64> = hi.iter().zip(lo.iter()).map(|(h, l)| h - l).collect();
    double_series(x, y, b, &coefficients)
}
