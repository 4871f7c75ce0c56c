//! Transport rates of species 1 due to collisions with species 2.
//!
//! With x = 1 − A12, y = A12·Δv²/(4·v12∥²), E = exp(−Δv²/(4·v12∥²)) and
//! F_a = E·F(1, 3/2; 5/2), F_b = E·F(1, ½; 5/2), F_c = E·F(2, ½; 5/2):
//!
//! ν_v    = ν12 · (Δv/2) · F_a
//! ν_T∥   = T1∥ · ν12 · [F_b·(m12/m2)·(T2∥/T1∥ − 1) − 2·(F_c − F_b) + F_a·Δv²/(2·v12∥²)]
//! ν_T⊥   = T1⊥ · (ν12/A12) · [F_c·(m12/m2)·(T2⊥/T1⊥ − 1) + (F_c − F_b)]
//!
//! F_c − F_b nearly vanishes for isotropic, drift-free plasmas. Subtracting
//! two quadrature estimates there leaves mostly quadrature error, so by
//! default the difference comes from the direct series.
//!
//! The default therefore departs from the reference outputs of the
//! quadrature-only formulation, which subtract two precision-2 quadratures. For the fast-wind proton-alpha pair
//! `DifferenceMethod::Quadrature` reproduces them (ν_T∥ ≈ 7.007e-4 s⁻¹,
//! ν_T⊥ ≈ 3.908e-4 s⁻¹), while the series difference gives ν_T∥ ≈ 2.346e-4 s⁻¹
//! and ν_T⊥ ≈ 6.505e-4 s⁻¹. F_b and F_c are still precision-2 quadratures in
//! both modes; only fdiff differs.
//!
//! E is folded into the exponent of every quadrature sample, so large drifts
//! give small finite terms instead of overflowing exp(t·y/(1 − t·x)).
//!
//! Reference: Hellinger & Trávníček, Phys Plasmas 16, 054501 (2009), Eqs. (12)-(14)

use serde::Serialize;

use super::hypergeometric::{evaluate_hypergeometric_scaled, hypergeometric_difference_series};
use super::{
    base_collision_frequency, CoulombLogarithm, DifferenceMethod, QuadratureConfig,
    ReducedQuantities, TransportError,
};
use crate::state::{SpeciesState, TransportRates};

/// Shape parameters (a, b, c) of the three hypergeometric terms
const MOMENTUM_TERM: (f64, f64, f64) = (1.0, 1.5, 2.5);
const PARALLEL_TERM: (f64, f64, f64) = (1.0, 0.5, 2.5);
const PERPENDICULAR_TERM: (f64, f64, f64) = (2.0, 0.5, 2.5);

/// Which evaluation produced the temperature-exchange difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DifferenceSource {
    Series,
    Subtraction,
}

/// Non-fatal warning that F_c − F_b is dominated by cancellation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionAdvisory {
    /// |fdiff| / |F_b + F_c|, see [`TransportReport::cancellation_ratio`]
    pub cancellation_ratio: f64,
    /// Configured threshold
    pub threshold: f64,
    /// Quadrature precision the estimate was made at
    pub precision: u32,
    /// How fdiff was formed
    pub source: DifferenceSource,
}

/// Rates together with the intermediates of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransportReport {
    pub rates: TransportRates,
    pub reduced: ReducedQuantities,
    pub coulomb_log: CoulombLogarithm,
    /// Base collision frequency ν12 (s⁻¹)
    pub base_frequency_per_sec: f64,
    /// Relative bulk velocity v2 − v1 (m/s)
    pub relative_velocity_m_per_s: f64,
    /// Hypergeometric argument x = 1 − A12
    pub x: f64,
    /// Hypergeometric argument y
    pub y: f64,
    /// E·F(1, 3/2; 5/2)
    pub f_momentum: f64,
    /// E·F(1, ½; 5/2)
    pub f_parallel: f64,
    /// E·F(2, ½; 5/2)
    pub f_perpendicular: f64,
    /// E·(F(2, ½; 5/2) − F(1, ½; 5/2))
    pub f_difference: f64,
    pub difference_source: DifferenceSource,
    /// |fdiff| / |F_b + F_c|
    ///
    /// With a series difference the numerator is the converged series while
    /// the denominator still carries the quadrature error of F_b and F_c, so
    /// at low precision the ratio mixes accuracies.
    pub cancellation_ratio: f64,
    pub advisory: Option<PrecisionAdvisory>,
}

/// E·F scaled inside the quadrature, E = exp(log_scale)
fn scaled_term(
    x: f64,
    y: f64,
    (a, b, c): (f64, f64, f64),
    precision: u32,
    log_scale: f64,
) -> Result<f64, TransportError> {
    evaluate_hypergeometric_scaled(x, y, a, b, c, precision, log_scale)
}

/// E·(F(2, ½; 5/2) − F(1, ½; 5/2))
///
/// `f_parallel` and `f_perpendicular` are the E-scaled quadrature estimates
/// used when subtraction is requested or the series does not apply.
fn temperature_exchange_difference(
    x: f64,
    y: f64,
    log_scale: f64,
    f_parallel: f64,
    f_perpendicular: f64,
    config: &QuadratureConfig,
) -> (f64, DifferenceSource) {
    match config.difference_method {
        DifferenceMethod::Quadrature => (f_perpendicular - f_parallel, DifferenceSource::Subtraction),
        DifferenceMethod::Series => {
            let (a_hi, b, c) = PERPENDICULAR_TERM;
            let (a_lo, _, _) = PARALLEL_TERM;
            match hypergeometric_difference_series(x, y, a_hi, a_lo, b, c) {
                Ok(difference) => (log_scale.exp() * difference, DifferenceSource::Series),
                Err(e) => {
                    log::debug!("Difference series unavailable ({}), subtracting quadratures", e);
                    (f_perpendicular - f_parallel, DifferenceSource::Subtraction)
                }
            }
        }
    }
}

fn cancellation_advisory(
    f_difference: f64,
    f_parallel: f64,
    f_perpendicular: f64,
    source: DifferenceSource,
    config: &QuadratureConfig,
) -> (f64, Option<PrecisionAdvisory>) {
    let sum = (f_parallel + f_perpendicular).abs();
    let ratio = if sum > 0.0 { f_difference.abs() / sum } else { 0.0 };

    if ratio >= config.cancellation_threshold {
        return (ratio, None);
    }

    match source {
        DifferenceSource::Subtraction => log::warn!(
            "F_c - F_b cancellation ratio {:.3e} below {:.3e} at precision {}; \
             consider a higher quadrature precision",
            ratio,
            config.cancellation_threshold,
            config.precision
        ),
        DifferenceSource::Series => log::debug!(
            "F_c - F_b cancellation ratio {:.3e} below {:.3e} (series difference)",
            ratio,
            config.cancellation_threshold
        ),
    }

    let advisory = PrecisionAdvisory {
        cancellation_ratio: ratio,
        threshold: config.cancellation_threshold,
        precision: config.precision,
        source,
    };
    (ratio, Some(advisory))
}

/// Evaluate the transport rates with all diagnostic intermediates
///
/// The relative velocity is Δv = v2 − v1 taken from the species records.
pub fn evaluate_transport(
    species1: &SpeciesState,
    species2: &SpeciesState,
    config: &QuadratureConfig,
) -> Result<TransportReport, TransportError> {
    let reduced = ReducedQuantities::compute(species1, species2)?;
    let coulomb_log = CoulombLogarithm::estimate(species1, species2)?;
    let nu = base_collision_frequency(coulomb_log.value, species1, species2, &reduced);

    let dv = species2.velocity_m_per_s - species1.velocity_m_per_s;
    let x = reduced.shape_x();
    let y = reduced.shape_y(dv);
    let log_drift = reduced.drift_exponent(dv);

    let f_momentum = scaled_term(x, y, MOMENTUM_TERM, config.precision, log_drift)?;
    let f_parallel = scaled_term(x, y, PARALLEL_TERM, config.precision, log_drift)?;
    let f_perpendicular = scaled_term(x, y, PERPENDICULAR_TERM, config.precision, log_drift)?;
    let (f_difference, difference_source) =
        temperature_exchange_difference(x, y, log_drift, f_parallel, f_perpendicular, config);

    let (cancellation_ratio, advisory) =
        cancellation_advisory(f_difference, f_parallel, f_perpendicular, difference_source, config);

    let mass_ratio = reduced.reduced_mass_kg / species2.mass_kg;
    let t1_par = species1.temperature_par_K;
    let t1_perp = species1.temperature_perp_K;

    let nu_v = nu * (dv / 2.0) * f_momentum;

    // parallel-parallel exchange, perpendicular coupling, frictional heating
    let nu_t_par = t1_par
        * nu
        * (f_parallel * mass_ratio * (species2.temperature_par_K / t1_par - 1.0)
            - 2.0 * f_difference
            + f_momentum * dv * dv / (2.0 * reduced.v12_par_sq()));

    // perpendicular-perpendicular exchange, parallel coupling
    let nu_t_perp = t1_perp
        * (nu / reduced.anisotropy)
        * (f_perpendicular * mass_ratio * (species2.temperature_perp_K / t1_perp - 1.0)
            + f_difference);

    let rates = TransportRates::new(nu_v, nu_t_par, nu_t_perp);
    if !rates.is_finite() {
        return Err(TransportError::numerical(x, 1.0, "transport rates are not finite"));
    }

    Ok(TransportReport {
        rates,
        reduced,
        coulomb_log,
        base_frequency_per_sec: nu,
        relative_velocity_m_per_s: dv,
        x,
        y,
        f_momentum,
        f_parallel,
        f_perpendicular,
        f_difference,
        difference_source,
        cancellation_ratio,
        advisory,
    })
}

/// Momentum and temperature relaxation rates of species 1 on species 2
pub fn compute_transport_rates(
    species1: &SpeciesState,
    species2: &SpeciesState,
    config: &QuadratureConfig,
) -> Result<TransportRates, TransportError> {
    Ok(evaluate_transport(species1, species2, config)?.rates)
}

/// Isotropization rate coefficient for a drift-free plasma
///
/// `anisotropy_excess` is X = T⊥/T∥ − 1, so A12 = X + 1 must be positive.
/// Returns (F(2, ½; 5/2) − F(1, ½; 5/2))·(3 + 2X) evaluated at x = −X, y = 0.
pub fn isotropization_rate_coefficient(
    anisotropy_excess: f64,
    config: &QuadratureConfig,
) -> Result<f64, TransportError> {
    let anisotropy = anisotropy_excess + 1.0;
    if !(anisotropy.is_finite() && anisotropy > 0.0) {
        return Err(TransportError::domain(
            "anisotropy",
            anisotropy,
            "T_perp/T_par must be positive",
        ));
    }

    let x = 1.0 - anisotropy;
    let y = 0.0;
    let f_b = scaled_term(x, y, PARALLEL_TERM, config.precision, 0.0)?;
    let f_c = scaled_term(x, y, PERPENDICULAR_TERM, config.precision, 0.0)?;
    let (difference, _) = temperature_exchange_difference(x, y, 0.0, f_b, f_c, config);

    Ok(difference * (3.0 + 2.0 * anisotropy_excess))
}

/// Sample the isotropization coefficient on an even grid of anisotropy excess
///
/// Returns (X, coefficient) pairs.
pub fn isotropization_curve(
    min_excess: f64,
    max_excess: f64,
    n_points: usize,
    config: &QuadratureConfig,
) -> Result<Vec<(f64, f64)>, TransportError> {
    let mut curve = Vec::with_capacity(n_points);
    for i in 0..n_points {
        let fraction = if n_points > 1 {
            i as f64 / (n_points - 1) as f64
        } else {
            0.0
        };
        let excess = min_excess + fraction * (max_excess - min_excess);
        curve.push((excess, isotropization_rate_coefficient(excess, config)?));
    }
    Ok(curve)
}

/// Expansion time over a distance at a constant bulk speed (s)
pub fn transit_time_sec(distance_m: f64, speed_m_per_s: f64) -> Result<f64, TransportError> {
    if !(speed_m_per_s.is_finite() && speed_m_per_s > 0.0) {
        return Err(TransportError::domain("speed_m_per_s", speed_m_per_s, "must be positive"));
    }
    if !(distance_m.is_finite() && distance_m >= 0.0) {
        return Err(TransportError::domain("distance_m", distance_m, "must be non-negative"));
    }
    Ok(distance_m / speed_m_per_s)
}
