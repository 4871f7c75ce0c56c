//! Reduced quantities of a two-species bi-Maxwellian pair.
//!
//! The combined thermal speeds and the effective anisotropy ratio set the
//! dimensionless shape arguments of the hypergeometric terms:
//!
//! v12∥² = (w1∥² + w2∥²)/2,  v12⊥² = (w1⊥² + w2⊥²)/2,  A12 = v12⊥²/v12∥²
//!
//! Reference: Hellinger & Trávníček, Phys Plasmas 16, 054501 (2009)

use serde::Serialize;

use super::TransportError;
use crate::state::SpeciesState;

/// Quantities derived from the two species for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReducedQuantities {
    /// Reduced mass m1·m2/(m1+m2) (kg)
    pub reduced_mass_kg: f64,
    /// Species 1 perpendicular thermal speed (m/s)
    pub w1_perp_m_per_s: f64,
    /// Species 1 parallel thermal speed (m/s)
    pub w1_par_m_per_s: f64,
    /// Species 2 perpendicular thermal speed (m/s)
    pub w2_perp_m_per_s: f64,
    /// Species 2 parallel thermal speed (m/s)
    pub w2_par_m_per_s: f64,
    /// Combined parallel thermal speed (m/s)
    pub v12_par_m_per_s: f64,
    /// Combined perpendicular thermal speed (m/s)
    pub v12_perp_m_per_s: f64,
    /// Effective anisotropy A12 = v12⊥²/v12∥²
    pub anisotropy: f64,
}

impl ReducedQuantities {
    /// Derive the reduced quantities, validating both species first
    pub fn compute(
        species1: &SpeciesState,
        species2: &SpeciesState,
    ) -> Result<Self, TransportError> {
        species1.validate()?;
        species2.validate()?;

        let m1 = species1.mass_kg;
        let m2 = species2.mass_kg;
        let reduced_mass_kg = (m1 / (m1 + m2)) * m2;

        let w1_perp_sq = species1.thermal_speed_perp_sq();
        let w1_par_sq = species1.thermal_speed_par_sq();
        let w2_perp_sq = species2.thermal_speed_perp_sq();
        let w2_par_sq = species2.thermal_speed_par_sq();

        let v12_par_sq = (w1_par_sq + w2_par_sq) / 2.0;
        let v12_perp_sq = (w1_perp_sq + w2_perp_sq) / 2.0;

        Ok(Self {
            reduced_mass_kg,
            w1_perp_m_per_s: w1_perp_sq.sqrt(),
            w1_par_m_per_s: w1_par_sq.sqrt(),
            w2_perp_m_per_s: w2_perp_sq.sqrt(),
            w2_par_m_per_s: w2_par_sq.sqrt(),
            v12_par_m_per_s: v12_par_sq.sqrt(),
            v12_perp_m_per_s: v12_perp_sq.sqrt(),
            anisotropy: v12_perp_sq / v12_par_sq,
        })
    }

    /// v12∥² (m²/s²)
    pub fn v12_par_sq(&self) -> f64 {
        self.v12_par_m_per_s * self.v12_par_m_per_s
    }

    /// Hypergeometric argument x = 1 − A12
    pub fn shape_x(&self) -> f64 {
        1.0 - self.anisotropy
    }

    /// Hypergeometric argument y = A12·Δv²/(4·v12∥²)
    pub fn shape_y(&self, relative_velocity_m_per_s: f64) -> f64 {
        self.anisotropy * relative_velocity_m_per_s.powi(2) / (4.0 * self.v12_par_sq())
    }

    /// ln E = −Δv²/(4·v12∥²)
    pub fn drift_exponent(&self, relative_velocity_m_per_s: f64) -> f64 {
        -relative_velocity_m_per_s.powi(2) / (4.0 * self.v12_par_sq())
    }

    /// Drift suppression factor E = exp(−Δv²/(4·v12∥²))
    pub fn drift_factor(&self, relative_velocity_m_per_s: f64) -> f64 {
        self.drift_exponent(relative_velocity_m_per_s).exp()
    }
}
