//! Parameter sweeps over independent transport evaluations.

use serde::Serialize;

use super::{compute_transport_rates, QuadratureConfig, TransportError};
use crate::state::{SpeciesState, TransportRates};

/// One point of a drift-speed sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftSweepPoint {
    /// Relative bulk velocity v2 − v1 (m/s)
    pub drift_m_per_s: f64,
    pub rates: TransportRates,
}

/// Evaluate the rates for species 2 drifting at each given speed relative to
/// species 1
///
/// Points are evaluated in order; the first failure aborts the sweep.
pub fn drift_speed_sweep(
    species1: &SpeciesState,
    species2: &SpeciesState,
    drifts_m_per_s: &[f64],
    config: &QuadratureConfig,
) -> Result<Vec<DriftSweepPoint>, TransportError> {
    drifts_m_per_s
        .iter()
        .map(|&drift| {
            let moved = species2.with_velocity(species1.velocity_m_per_s + drift);
            let rates = compute_transport_rates(species1, &moved, config)?;
            Ok(DriftSweepPoint {
                drift_m_per_s: drift,
                rates,
            })
        })
        .collect()
}
